//! Session-token verification.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use journal_core::config::identity::IdentityConfig;
use journal_core::error::AppError;
use journal_core::AppResult;

/// Claims carried by an identity-provider session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the identity-provider user id.
    pub sub: String,
    /// Email address, when the provider includes one.
    #[serde(default)]
    pub email: Option<String>,
    /// Organization role, when the user belongs to the journal's org.
    #[serde(default)]
    pub org_role: Option<String>,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Verifies session-token signatures and expiry.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish()
    }
}

impl TokenVerifier {
    /// Build a verifier from identity configuration.
    pub fn new(config: &IdentityConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation,
        }
    }

    /// Verify a session token and return its claims.
    pub fn verify(&self, token: &str) -> AppResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                AppError::authentication(format!("Invalid session token: {e}"))
            })
    }
}
