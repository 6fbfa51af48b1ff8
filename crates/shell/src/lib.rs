//! `vantage-shell` — routing-layer integration of the authorization core.
//!
//! Declares the static route table with its per-area role requirements,
//! resolves navigations through the guards (render vs. redirect), and wires
//! bootstrap: session init from storage, menu construction on entry, and
//! the signed-out hook back to the landing view.

pub mod router;
pub mod routes;
pub mod shell;

pub use router::{Outcome, Router};
pub use routes::{DASHBOARD, LANDING, LOGIN, NOT_FOUND, Route, UNAUTHORIZED, route_table};
pub use shell::Shell;
