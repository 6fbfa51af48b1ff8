use std::sync::{Arc, Mutex};

use vantage_nav::{MenuEntry, build_menu};
use vantage_session::Session;

use crate::router::{Outcome, Router};
use crate::routes;

/// The application shell: session, router and the current view.
///
/// Owns the wiring the UI layer consumes: bootstrap, navigation, the menu,
/// and the sign-out hook (clearing the credential anywhere lands the shell
/// back on the public landing view).
pub struct Shell {
    session: Arc<Session>,
    router: Router,
    view: Arc<Mutex<String>>,
}

impl Shell {
    pub fn new(session: Arc<Session>) -> Self {
        let view = Arc::new(Mutex::new(routes::LANDING.to_string()));

        let on_sign_out = Arc::clone(&view);
        session.state().subscribe(move |signed_in| {
            if !signed_in {
                *on_sign_out.lock().unwrap() = routes::LANDING.to_string();
            }
        });

        Self {
            session,
            router: Router::new(),
            view,
        }
    }

    /// Application bootstrap: observability up, then the session flag
    /// recomputed from whatever credential storage holds.
    pub fn bootstrap(&self) {
        vantage_observability::init();
        self.session.init();
    }

    /// Resolve a navigation and move the current view accordingly.
    pub fn navigate(&self, path: &str) -> Outcome {
        let outcome = self.router.resolve(path, &self.session);
        let next = match &outcome {
            Outcome::Render(_) => path,
            Outcome::Redirect(target) => target,
        };
        *self.view.lock().unwrap() = next.to_string();
        outcome
    }

    pub fn current_view(&self) -> String {
        self.view.lock().unwrap().clone()
    }

    /// Build the navigation menu for the established session.
    ///
    /// The layout calls this once after successful entry; the menu is not
    /// reactive to claim changes within a token's lifetime — changing it
    /// requires a fresh login.
    pub fn menu(&self) -> Vec<MenuEntry> {
        let role = self.session.role();
        let pages = self.session.pages();
        build_menu(role.as_ref(), &pages)
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}
