use crate::error::ConfigError;

/// Ranges up to this length are handled by the fixed sorting networks.
pub const MAX_NETWORK_LEN: usize = 5;

/// Ranges shorter than this, and longer than [`MAX_NETWORK_LEN`], are sorted with insertion sort.
pub const SMALL_SORT_THRESHOLD: usize = 32;

/// The select loop is only ever left once through insertion sort, so something simpler than the
/// sort threshold is plenty.
pub const SELECT_INSERTION_THRESHOLD: usize = 16;

/// Number of partition steps the select loop may take before the heap sort fallback kicks in.
///
/// This needs to be constant, an `ilog2(len)` based budget like the one used for sorting would
/// make the selection *O*(*n* \* log(*n*)).
pub const SELECT_STEP_LIMIT: u32 = 16;

/// What the drivers do once a range has used up its budget of imbalanced partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Keep partitioning. Average *O*(*n* \* log(*n*)) sort and *O*(*n*) select, but adversarial
    /// inputs can push both to *O*(*n*^2) comparisons.
    None,
    /// Finish the range with heap sort, guaranteeing *O*(*n* \* log(*n*)) worst-case.
    HeapSort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub small_sort_threshold: usize,
    pub fallback: Fallback,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            small_sort_threshold: SMALL_SORT_THRESHOLD,
            fallback: Fallback::HeapSort,
        }
    }
}

impl SortConfig {
    /// The drivers without any worst-case safety net, quicksort and quickselect only.
    pub fn plain() -> Self {
        Self {
            fallback: Fallback::None,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_small_sort_threshold(mut self, threshold: usize) -> Self {
        self.small_sort_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = MAX_NETWORK_LEN + 1;
        if self.small_sort_threshold < min {
            return Err(ConfigError::SmallSortThresholdTooLow {
                threshold: self.small_sort_threshold,
                min,
            });
        }

        Ok(())
    }

    /// Partition levels a sort of `len` elements may go through before falling back, if enabled.
    ///
    /// The binary OR by one is used to eliminate the zero-check in the logarithm.
    #[inline]
    pub(crate) fn sort_limit(&self, len: usize) -> Option<u32> {
        match self.fallback {
            Fallback::None => None,
            Fallback::HeapSort => Some(2 * (len | 1).ilog2()),
        }
    }

    #[inline]
    pub(crate) fn select_limit(&self) -> Option<u32> {
        match self.fallback {
            Fallback::None => None,
            Fallback::HeapSort => Some(SELECT_STEP_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SortConfig::default();
        assert_eq!(config.small_sort_threshold, 32);
        assert_eq!(config.fallback, Fallback::HeapSort);
        assert!(config.validate().is_ok());

        assert_eq!(SortConfig::plain().fallback, Fallback::None);
        assert_eq!(SortConfig::plain().small_sort_threshold, 32);
    }

    #[test]
    fn validate_threshold() {
        assert_eq!(
            SortConfig::default()
                .with_small_sort_threshold(5)
                .validate(),
            Err(ConfigError::SmallSortThresholdTooLow {
                threshold: 5,
                min: 6
            })
        );
        assert!(SortConfig::default()
            .with_small_sort_threshold(6)
            .validate()
            .is_ok());
    }

    #[test]
    fn limits() {
        let config = SortConfig::default();
        assert_eq!(config.sort_limit(0), Some(0));
        assert_eq!(config.sort_limit(1024), Some(20));
        assert_eq!(config.select_limit(), Some(SELECT_STEP_LIMIT));

        let config = config.with_fallback(Fallback::None);
        assert_eq!(config.sort_limit(1024), None);
        assert_eq!(config.select_limit(), None);
    }
}
