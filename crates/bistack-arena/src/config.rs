//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`TempArena`](crate::TempArena).
///
/// The capacity is fixed for the lifetime of the arena; it is never grown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the backing buffer in bytes.
    ///
    /// Default: 262_144 (256 KiB). Must be non-zero.
    pub capacity: usize,
}

impl ArenaConfig {
    /// Default capacity: 256 KiB.
    pub const DEFAULT_CAPACITY: usize = 256 * 1024;

    /// Create a config with the given capacity in bytes.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the config, returning [`ArenaError::InvalidConfig`] on failure.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "capacity must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
