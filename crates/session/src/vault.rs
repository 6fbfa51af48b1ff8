use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

/// Fixed storage key the credential lives under.
pub const CREDENTIAL_KEY: &str = "auth_token";

/// Persistent storage for the bearer credential.
///
/// The contract has no error conditions: persistence is treated as
/// always-succeeding, and an unavailable medium degrades reads to "no
/// credential". Implementations log underlying failures and swallow them —
/// a storage fault must look exactly like a logged-out session, never crash
/// the shell.
pub trait CredentialVault: Send + Sync {
    /// Persist the token verbatim under [`CREDENTIAL_KEY`].
    fn save(&self, token: &str);

    /// The persisted token verbatim, or `None`.
    fn read(&self) -> Option<String>;

    /// Remove the token. Removing an absent token is a no-op.
    fn clear(&self);

    /// Presence check without handing out the token; used wherever the
    /// claims themselves are not needed, avoiding a decode.
    fn exists(&self) -> bool {
        self.read().is_some()
    }
}

/// File-backed vault in the platform data directory.
///
/// Writes go through a temp file and rename, so a partially-written
/// credential is never observable: the stored credential is either entirely
/// absent or the full token string.
#[derive(Debug, Clone)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    /// Vault at the default location (`<data_dir>/vantage/auth_token`).
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            path: base.join("vantage").join(CREDENTIAL_KEY),
        }
    }

    /// Vault at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_atomically(&self, token: &str) -> anyhow::Result<()> {
        let parent = self
            .path
            .parent()
            .context("credential path has no parent directory")?;
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create vault directory {parent:?}"))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, token).with_context(|| format!("failed to write {tmp:?}"))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to move credential into place at {:?}", self.path))?;
        Ok(())
    }
}

impl Default for FileVault {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVault for FileVault {
    fn save(&self, token: &str) {
        if let Err(err) = self.write_atomically(token) {
            tracing::error!("failed to persist credential: {err:?}");
        }
    }

    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Some(token),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::error!("failed to read credential, degrading to none: {err:?}");
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::error!("failed to clear credential: {err:?}");
            }
        }
    }
}

/// In-memory vault for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryVault {
    token: Mutex<Option<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialVault for MemoryVault {
    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn read(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}
