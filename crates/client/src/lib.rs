//! `vantage-client` — outbound HTTP client for the dashboard backend.
//!
//! Every request to the backend origin passes through one attachment point
//! that adds the bearer credential when one is stored. The login call is the
//! collaborator that *creates* the credential: on success the token is handed
//! to the session, which persists it and flips the session flag.

pub mod backend;
pub mod error;

pub use backend::BackendClient;
pub use error::ClientError;
