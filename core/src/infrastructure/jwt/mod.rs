pub mod jsonwebtoken_signer;

pub use jsonwebtoken_signer::JsonWebTokenSigner;
