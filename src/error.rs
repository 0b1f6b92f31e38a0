//! Error types for the rank partition and configuration.

use std::fmt;

/// Errors reported by the rank partition entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// The requested rank is not a valid index into the buffer. This includes every rank for an
    /// empty buffer.
    IndexOutOfBounds { index: usize, len: usize },

    /// The supplied [`crate::SortConfig`] is not usable.
    InvalidConfig(ConfigError),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "partition index {} out of range for buffer of length {}",
                    index, len
                )
            }
            PartitionError::InvalidConfig(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for PartitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PartitionError::IndexOutOfBounds { .. } => None,
            PartitionError::InvalidConfig(err) => Some(err),
        }
    }
}

impl From<ConfigError> for PartitionError {
    fn from(err: ConfigError) -> Self {
        PartitionError::InvalidConfig(err)
    }
}

/// Errors reported by [`crate::SortConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The insertion sort threshold must lie above the largest sorting network, otherwise ranges
    /// would fall through both.
    SmallSortThresholdTooLow { threshold: usize, min: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SmallSortThresholdTooLow { threshold, min } => {
                write!(
                    f,
                    "small sort threshold {} too low: need at least {}",
                    threshold, min
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
