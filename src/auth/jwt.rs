//! JWT signing and verification against the shared secret.
//!
//! Validation is stateless: a token is accepted purely on its HS256
//! signature, with no lookup against any store. Issued tokens carry no
//! expiry claim; tokens that do carry one are still checked against it.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity claims embedded in a signed credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Asserted identity of the caller.
    pub username: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed")]
    Malformed,
    #[error("token signing failed")]
    SigningFailed,
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Signs and verifies bearer credentials with keys derived once from the
/// shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // `exp` is optional: the issuance path never sets one, and requiring
        // it would reject every credential this gateway hands out.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Sign a credential asserting `username`, with no expiry.
    pub fn issue(&self, username: &str) -> AuthResult<String> {
        let claims = Claims {
            username: username.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::SigningFailed)
    }

    /// Verify a credential's signature and decode its claims.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn create_test_signer() -> TokenSigner {
        TokenSigner::new("test_secret_key_for_testing_only")
    }

    #[test]
    fn test_token_issuance() {
        let signer = create_test_signer();

        let token = signer.issue("testUser").unwrap();

        // Token should be non-empty
        assert!(!token.is_empty());

        // Token should have three parts (header.payload.signature)
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_token_verification() {
        let signer = create_test_signer();

        let token = signer.issue("testUser").unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.username, "testUser");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let signer = create_test_signer();

        let result = signer.verify("invalid.token.here");
        assert!(matches!(
            result,
            Err(AuthError::Malformed) | Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer1 = TokenSigner::new("secret_one");
        let signer2 = TokenSigner::new("secret_two");

        let token = signer1.issue("testUser").unwrap();

        // Token from signer1 should not verify with signer2
        let result = signer2.verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[test]
    fn test_token_without_expiry_accepted() {
        let signer = create_test_signer();

        // Issued tokens carry no `exp` claim and must still verify.
        let token = signer.issue("testUser").unwrap();
        assert!(signer.verify(&token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Craft a token that carries an `exp` claim in the past.
        #[derive(Serialize)]
        struct ExpiringClaims {
            username: String,
            exp: i64,
        }

        let secret = "test_secret";
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        let claims = ExpiringClaims {
            username: "testUser".to_string(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &encoding_key).unwrap();

        let signer = TokenSigner::new(secret);
        let result = signer.verify(&token);
        assert!(matches!(result, Err(AuthError::Expired)));
    }
}
