//! Runtime configuration from environment variables.
//!
//! ## `DOCTREE_STACK_SIZE`
//!
//! Stack size for connection coroutines, in decimal (`16384`) or hex
//! (`0x4000`). Default: `0x4000` (16 KB). Larger stacks support deeper
//! request bodies and call chains; smaller stacks reduce memory per
//! concurrent connection.

use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Load at startup with [`RuntimeConfig::from_env()`] before the first
/// coroutine is spawned.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let stack_size = match env::var("DOCTREE_STACK_SIZE") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(0x4000)
                } else {
                    val.parse().unwrap_or(0x4000)
                }
            }
            Err(_) => 0x4000,
        };
        RuntimeConfig { stack_size }
    }
}
