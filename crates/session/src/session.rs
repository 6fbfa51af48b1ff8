use std::sync::Arc;

use vantage_auth::{Claims, Role, decode_token};

use crate::state::SessionState;
use crate::vault::CredentialVault;

/// Facade over the credential vault and the session flag.
///
/// The vault and the flag always move together: saving a credential signs
/// the session in, clearing it signs the session out. Claims are decoded on
/// demand from the currently stored credential and never cached here — see
/// [`vantage_auth::Claims`] for why.
pub struct Session {
    vault: Arc<dyn CredentialVault>,
    state: SessionState,
}

impl Session {
    pub fn new(vault: Arc<dyn CredentialVault>) -> Self {
        Self {
            vault,
            state: SessionState::new(),
        }
    }

    /// Recompute the flag from storage at application bootstrap.
    pub fn init(&self) {
        let present = self.vault.exists();
        tracing::debug!(credential_present = present, "session initialized from store");
        self.state.set(present);
    }

    /// Persist the credential handed back by a successful login.
    pub fn save_credential(&self, token: &str) {
        self.vault.save(token);
        self.state.set(true);
    }

    /// Drop the credential and sign the session out.
    ///
    /// Observers of [`Self::state`] see the flip to `false`; the shell
    /// reacts by navigating to the public landing view.
    pub fn clear_credential(&self) {
        self.vault.clear();
        self.state.set(false);
    }

    /// The stored credential verbatim, for outbound attachment.
    pub fn credential(&self) -> Option<String> {
        self.vault.read()
    }

    pub fn has_credential(&self) -> bool {
        self.vault.exists()
    }

    /// Decode the current credential's claims; absent or malformed tokens
    /// both come back as `None`.
    pub fn claims(&self) -> Option<Claims> {
        self.credential().and_then(|token| decode_token(&token))
    }

    pub fn role(&self) -> Option<Role> {
        self.claims().and_then(|claims| claims.role())
    }

    pub fn pages(&self) -> Vec<String> {
        self.claims()
            .map(|claims| claims.pages().to_vec())
            .unwrap_or_default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryVault;

    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn forge_token(payload: serde_json::Value) -> String {
        format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap())
        )
    }

    fn memory_session() -> Session {
        Session::new(Arc::new(MemoryVault::new()))
    }

    #[test]
    fn init_reflects_storage() {
        let session = memory_session();
        session.init();
        assert!(!session.state().is_signed_in());

        session.save_credential("a.b.c");
        let rehydrated = Session::new(Arc::new(MemoryVault::new()));
        rehydrated.save_credential("a.b.c");
        rehydrated.init();
        assert!(rehydrated.state().is_signed_in());
    }

    #[test]
    fn save_and_clear_flip_the_flag() {
        let session = memory_session();
        session.save_credential("a.b.c");
        assert!(session.state().is_signed_in());
        assert!(session.has_credential());

        session.clear_credential();
        assert!(!session.state().is_signed_in());
        assert!(!session.has_credential());
        assert_eq!(session.claims(), None);
    }

    #[test]
    fn claims_follow_the_stored_credential() {
        let session = memory_session();
        session.save_credential(&forge_token(serde_json::json!({
            "role": "Sales Manager",
            "pages": ["Sales Overview"],
        })));

        assert_eq!(session.role().unwrap().as_str(), "sales manager");
        assert_eq!(session.pages(), ["Sales Overview"]);

        // Replace the credential: the next read decodes the new one.
        session.save_credential(&forge_token(serde_json::json!({
            "role": "logistics manager",
        })));
        assert_eq!(session.role().unwrap().as_str(), "logistics manager");
        assert!(session.pages().is_empty());
    }

    #[test]
    fn malformed_credential_reads_as_no_claims() {
        let session = memory_session();
        session.save_credential("not-a-token");
        // Present for the authentication check...
        assert!(session.has_credential());
        // ...but no claims, so role-gated checks will deny.
        assert_eq!(session.claims(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn logout_notifies_observers() {
        let session = memory_session();
        let flips = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&flips);
        session.state().subscribe(move |v| sink.lock().unwrap().push(v));

        session.save_credential("a.b.c");
        session.clear_credential();

        assert_eq!(*flips.lock().unwrap(), vec![false, true, false]);
    }
}
