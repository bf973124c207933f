//! The `Salt` type.
//!
//! A salt is an opaque string of exactly [`SALT_LEN`] characters. It is
//! the shared secret behind every mppass, so the backing memory is wiped
//! on drop and `Debug` never prints it.

use std::fmt;

use zeroize::Zeroize;

use crate::errors::{MppassError, Result};

/// Required salt length, in characters.
pub const SALT_LEN: usize = 16;

/// A validated server salt.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Salt {
    value: String,
}

impl Salt {
    /// Validate `raw` and wrap it as a `Salt`.
    ///
    /// Surrounding whitespace (including a trailing newline and the
    /// U+001C..=U+001F separators) is trimmed first. The remainder must be
    /// exactly `SALT_LEN` characters long; characters are Unicode scalar
    /// values, not bytes.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim_matches(is_salt_padding);

        if trimmed.chars().count() != SALT_LEN {
            return Err(MppassError::InvalidSaltFormat { expected: SALT_LEN });
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Borrow the salt text.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

/// Characters stripped from either end of the salt file.
fn is_salt_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salt").field("value", &"<redacted>").finish()
    }
}
