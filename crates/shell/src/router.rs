use vantage_auth::{Decision, Redirect, authentication_guard, page_access_guard};
use vantage_session::Session;

use crate::routes::{self, Route, route_table};

/// Result of resolving a navigation: construct the view, or go elsewhere.
///
/// There is no error variant on purpose — guard evaluation is total, so
/// every navigation resolves to one of these, including navigations made
/// with corrupted or adversarial credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Enter the route (named by its table entry).
    Render(&'static str),
    /// Do not enter; navigate to this path instead.
    Redirect(&'static str),
}

/// Resolves paths against the route table, consulting the guards before a
/// protected view is constructed. A denied navigation never partially
/// renders; it only redirects.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: route_table(),
        }
    }

    fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(path))
    }

    pub fn resolve(&self, path: &str, session: &Session) -> Outcome {
        let Some(route) = self.find(path) else {
            tracing::debug!(path, "no matching route");
            return Outcome::Redirect(routes::NOT_FOUND);
        };

        if route.protected {
            // Presence first; only then is decoding worth doing.
            if let Decision::Deny(redirect) = authentication_guard(session.has_credential()) {
                return Outcome::Redirect(target(redirect));
            }

            if let Some(requirement) = &route.requirement {
                // Claims are decoded fresh for this evaluation and dropped
                // after it; the credential may change before the next one.
                let claims = session.claims();
                if let Decision::Deny(redirect) = page_access_guard(claims.as_ref(), requirement) {
                    tracing::debug!(path, route = route.name, "navigation denied");
                    return Outcome::Redirect(target(redirect));
                }
            }
        }

        Outcome::Render(route.name)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn target(redirect: Redirect) -> &'static str {
    match redirect {
        Redirect::Landing => routes::LANDING,
        Redirect::Unauthorized => routes::UNAUTHORIZED,
    }
}
