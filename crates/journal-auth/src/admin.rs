//! Admin authorization gate.

use journal_core::config::identity::IdentityConfig;

use crate::session::SessionContext;

/// Decides whether a session may use the admin area.
///
/// A user is an admin when their id appears on the configured allow-list
/// or their organization role equals the admin marker.
#[derive(Debug, Clone)]
pub struct AdminGate {
    allowed_user_ids: Vec<String>,
    admin_role: String,
}

impl AdminGate {
    /// Build the gate from identity configuration.
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            allowed_user_ids: config.admin_user_ids.clone(),
            admin_role: config.admin_role.clone(),
        }
    }

    /// Whether this session is authorized for the admin area.
    pub fn authorizes(&self, session: &SessionContext) -> bool {
        if self.allowed_user_ids.iter().any(|id| id == &session.user_id) {
            return true;
        }
        session
            .org_role
            .as_deref()
            .is_some_and(|role| role == self.admin_role)
    }
}
