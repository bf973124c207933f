//! Loading the salt from disk.
//!
//! `SaltStore` owns the path of the salt file and nothing else. The path
//! is handed in at construction so callers (and tests) decide where the
//! salt lives. The store only ever reads; it never creates or repairs
//! the file.

use std::fs;
use std::path::PathBuf;

use crate::errors::{MppassError, Result};

use super::value::Salt;

/// Default salt file name, relative to the working directory.
pub const DEFAULT_SALT_FILE: &str = "server.salt";

/// Read-only handle on a salt file.
#[derive(Debug, Clone)]
pub struct SaltStore {
    path: PathBuf,
}

impl SaltStore {
    /// Create a store for the salt file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and validate the salt.
    ///
    /// Fails with `SaltNotFound` when the file does not exist and with
    /// `InvalidSaltFormat` when its trimmed content is not exactly 16
    /// characters. Any other read failure surfaces as `Io`.
    pub fn load(&self) -> Result<Salt> {
        if !self.path.exists() {
            return Err(MppassError::SaltNotFound(self.path.clone()));
        }

        let contents = zeroize::Zeroizing::new(fs::read_to_string(&self.path)?);
        let salt = Salt::parse(&contents)?;

        tracing::debug!(path = %self.path.display(), "loaded salt");
        Ok(salt)
    }
}
