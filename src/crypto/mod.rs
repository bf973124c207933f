//! Credential derivation.
//!
//! This module provides:
//! - MD5-based mppass derivation and constant-time verification (`mppass`)

pub mod mppass;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive, verify, Username, Mppass};
pub use mppass::{derive, verify, Mppass, Username, MPPASS_LEN};
