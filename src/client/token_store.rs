//! Bearer Token Storage
//!
//! The bearer token is the only client state that outlives a process. Two
//! stores are provided:
//!
//! - [`MemoryTokenStore`] keeps it for the lifetime of the process only.
//! - [`FileTokenStore`] writes it to a single file (`token`) in the user
//!   config directory, readable by the owner only on Unix.
//!
//! The file store keeps the token unencrypted. Anyone who can read the file
//! can act as the user until the token expires, so prefer short-lived tokens
//! refreshed with `cloudvault refresh`, or run with `--no-persist`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

/// File name used by [`FileTokenStore`]
pub const TOKEN_FILE_NAME: &str = "token";

/// Where the session's bearer token lives between requests
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> io::Result<Option<String>>;

    /// Replace the stored token
    fn save(&self, token: &str) -> io::Result<()>;

    /// Remove the stored token. Removing a missing token is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// Process-lifetime token storage
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a valid Option.
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Token persisted to a file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `<dir>/token`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(TOKEN_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let created = !self.path.exists();
        let mut file = open_private(&self.path)?;
        file.write_all(token.as_bytes())?;
        file.sync_all()?;
        if created {
            warn!(path = %self.path.display(), "bearer token stored unencrypted on disk");
        } else {
            debug!(path = %self.path.display(), "stored token replaced");
        }
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed stored token");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
