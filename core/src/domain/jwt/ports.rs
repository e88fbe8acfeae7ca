use crate::domain::{common::entities::app_errors::CoreError, jwt::entities::JwtClaim};

/// Signs and verifies access tokens. Verification checks signature and expiry.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claim: &JwtClaim) -> Result<String, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
