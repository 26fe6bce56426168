//! # journal-auth
//!
//! Identity-provider integration: session-token verification, the
//! per-request session context, the admin gate, and the organization
//! membership client.

pub mod admin;
pub mod members;
pub mod session;
pub mod token;

pub use admin::AdminGate;
pub use members::IdentityClient;
pub use session::SessionContext;
pub use token::TokenVerifier;
