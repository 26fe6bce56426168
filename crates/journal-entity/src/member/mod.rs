//! Identity-provider organization membership shapes.

pub mod directory;
pub mod model;

pub use directory::MembershipDirectory;
pub use model::OrgMember;
