//! Salt module: the server's secret 16-character salt.
//!
//! This module provides:
//! - The validated, zeroize-on-drop `Salt` value (`value`)
//! - `SaltStore`, which loads a `Salt` from a file on disk (`store`)

pub mod store;
pub mod value;

// Re-export the most commonly used items.
pub use store::{SaltStore, DEFAULT_SALT_FILE};
pub use value::{Salt, SALT_LEN};
