//! Membership directory trait.

use async_trait::async_trait;

use journal_core::AppResult;

use super::model::OrgMember;

/// Trait for the identity provider's organization membership listing.
#[async_trait]
pub trait MembershipDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// List all members of the journal's organization.
    async fn list_members(&self) -> AppResult<Vec<OrgMember>>;
}
