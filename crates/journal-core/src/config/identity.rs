//! Identity provider configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the hosted identity provider.
///
/// The provider issues signed session tokens and exposes a membership API
/// for the journal's organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Shared secret used to verify session token signatures.
    pub token_secret: String,
    /// Expected token issuer.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Base URL of the provider's management API.
    pub api_url: String,
    /// API key for the management API.
    pub api_key: String,
    /// Organization whose membership backs the admin directory.
    pub organization_id: String,
    /// Organization role treated as an admin marker.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
    /// User ids granted admin access regardless of organization role.
    #[serde(default)]
    pub admin_user_ids: Vec<String>,
}

fn default_admin_role() -> String {
    "org:admin".to_string()
}
