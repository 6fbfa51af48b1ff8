//! `vantage-session` — credential persistence and the observable session flag.
//!
//! Owns the bearer credential exclusively: the rest of the application only
//! ever holds a transient decoded copy of its claims. Storage is behind the
//! [`CredentialVault`] trait; operations are always-succeeding from the
//! caller's view, degrading to "no credential" when the medium is
//! unavailable (fail open toward "not authenticated", fail closed toward
//! protected resources).

pub mod session;
pub mod state;
pub mod vault;

pub use session::Session;
pub use state::SessionState;
pub use vault::{CREDENTIAL_KEY, CredentialVault, FileVault, MemoryVault};
