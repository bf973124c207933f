//! mppass ("multiplayer password") derivation.
//!
//! The mppass for a user is `hex(MD5(salt ++ username))`: salt first,
//! no separator, UTF-8 bytes, lowercase hex. Authentication services
//! that speak the ClassiCube heartbeat protocol expect exactly this
//! value, so the algorithm and byte layout are fixed.

use std::fmt;

use md5::{Digest, Md5};
use subtle::ConstantTimeEq;

use crate::errors::{MppassError, Result};
use crate::salt::Salt;

/// Length of a rendered mppass (MD5 digest as hex).
pub const MPPASS_LEN: usize = 32;

/// A username with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MppassError::EmptyUsername);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A derived mppass: 32 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mppass(String);

impl Mppass {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mppass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the mppass for `username` under `salt`.
pub fn derive(salt: &Salt, username: &Username) -> Mppass {
    let digest = Md5::new()
        .chain_update(salt.expose().as_bytes())
        .chain_update(username.as_str().as_bytes())
        .finalize();

    tracing::trace!(username = %username, "derived mppass");
    Mppass(format!("{digest:x}"))
}

/// Check a presented mppass against the one derived for `username`.
///
/// The comparison is exact and constant-time: an uppercase rendering of
/// the right digest does not match.
pub fn verify(salt: &Salt, username: &Username, presented: &str) -> bool {
    let expected = derive(salt, username);
    expected
        .as_str()
        .as_bytes()
        .ct_eq(presented.as_bytes())
        .into()
}
