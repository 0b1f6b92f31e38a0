use std::cmp::Ordering;
use std::fmt;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// A rank partition, also known as select or nth element.
///
/// After a successful call `arr[index]` holds the element that would be there if `arr` was
/// sorted, nothing before it is greater and nothing after it is less. Out of range indices must
/// leave `arr` untouched and report [`IndexOutOfRange`].
pub trait Select {
    fn name() -> String;

    fn select<T>(arr: &mut [T], index: usize) -> Result<(), IndexOutOfRange>
    where
        T: Ord;

    fn select_by<T, F>(arr: &mut [T], index: usize, compare: F) -> Result<(), IndexOutOfRange>
    where
        F: FnMut(&T, &T) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfRange {}

pub mod patterns;
pub mod value_types;
