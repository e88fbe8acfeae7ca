use std::str::FromStr;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    jwt::{entities::JwtClaim, ports::TokenSigner},
};

/// Shared-secret token signer (HMAC algorithms only).
#[derive(Clone)]
pub struct JsonWebTokenSigner {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JsonWebTokenSigner {
    pub fn new(config: &AuthConfig) -> Result<Self, CoreError> {
        let algorithm = Algorithm::from_str(&config.signing_algorithm).map_err(|e| {
            CoreError::Invalid(format!(
                "unsupported signing algorithm '{}': {}",
                config.signing_algorithm, e
            ))
        })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(CoreError::Invalid(format!(
                "signing algorithm {:?} needs a key pair, only HS256/HS384/HS512 are supported",
                algorithm
            )));
        }

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
        })
    }
}

impl TokenSigner for JsonWebTokenSigner {
    fn sign(&self, claim: &JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(self.algorithm), claim, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected access token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
