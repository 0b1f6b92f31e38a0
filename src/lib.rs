//! In-place, comparison driven sorting and order statistics for any index-addressable storage.
//!
//! The engine is layered the way most production unstable sorts are: fixed sorting networks for
//! up to 5 elements, insertion sort for short ranges, and an iterative median-of-3 quicksort on
//! top. Recursion is replaced by an explicit, fixed-capacity work-list, so no call ever allocates
//! or grows the native stack with the input size. A rank partition (quickselect) and a standalone
//! heap sort are built from the same pieces.

use std::cmp::Ordering;
use std::mem;
use std::ops::Range;

mod buffer;
mod config;
mod error;
mod heapsort;
mod quicksort;
mod select;
mod smallsort;
mod worklist;

pub use buffer::SortBuffer;
pub use config::{
    Fallback, SortConfig, MAX_NETWORK_LEN, SELECT_INSERTION_THRESHOLD, SELECT_STEP_LIMIT,
    SMALL_SORT_THRESHOLD,
};
pub use error::{ConfigError, PartitionError};

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Iterative quicksort with median-of-3 pivot selection. Runs of elements equal to the pivot of a
/// previous partition are split off and never looked at again, which keeps inputs with many
/// duplicates at *O*(*n* \* log(*n*)). Ranges that keep partitioning badly are finished with heap
/// sort, see [`Fallback`].
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sort_engine::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, &SortConfig::default(), &mut T::lt);
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice is still a
/// permutation of its input. Same is true if `compare` panics.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// sort_engine::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// sort_engine::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, &SortConfig::default(), &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts the slice with a strict weak ordering predicate, `is_less(a, b)` meaning `a` must be
/// placed before `b`.
#[inline]
pub fn sort_by_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    unstable_sort(v, &SortConfig::default(), &mut is_less);
}

/// Sorts any [`SortBuffer`] with a strict weak ordering predicate.
///
/// ```
/// use std::collections::VecDeque;
///
/// let mut v = VecDeque::from(vec![3, 1, 2]);
/// v.push_front(4);
/// sort_engine::sort_buffer_by(&mut v, |a, b| a < b);
/// assert!(v.iter().eq([1, 2, 3, 4].iter()));
/// ```
#[inline]
pub fn sort_buffer_by<T, B, F>(v: &mut B, mut is_less: F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    unstable_sort(v, &SortConfig::default(), &mut is_less);
}

/// Like [`sort_buffer_by`], with explicit tunables.
pub fn sort_buffer_with_config<T, B, F>(
    v: &mut B,
    config: &SortConfig,
    mut is_less: F,
) -> Result<(), ConfigError>
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    config.validate()?;
    unstable_sort(v, config, &mut is_less);
    Ok(())
}

/// Reorders the slice such that the element at `index` is at its final sorted position.
///
/// All elements before `index` are less than or equal to it, all elements after it are greater
/// than or equal to it, both sides are otherwise unordered. Returns the elements before `index`,
/// the element at `index` and the elements after it.
///
/// Fails with [`PartitionError::IndexOutOfBounds`] if `index >= v.len()`, in which case `v` is
/// left untouched.
///
/// # Examples
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
///
/// // Find the median
/// let (_, median, _) = sort_engine::partition(&mut v, 2).unwrap();
/// assert_eq!(*median, 1);
/// ```
#[inline]
pub fn partition<T>(
    v: &mut [T],
    index: usize,
) -> Result<(&mut [T], &mut T, &mut [T]), PartitionError>
where
    T: Ord,
{
    partition_by_less(v, index, T::lt)
}

/// [`partition`] with a comparator function.
#[inline]
pub fn partition_by<T, F>(
    v: &mut [T],
    index: usize,
    mut compare: F,
) -> Result<(&mut [T], &mut T, &mut [T]), PartitionError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_by_less(v, index, |a, b| compare(a, b) == Ordering::Less)
}

/// [`partition`] with a strict weak ordering predicate.
pub fn partition_by_less<T, F>(
    v: &mut [T],
    index: usize,
    mut is_less: F,
) -> Result<(&mut [T], &mut T, &mut [T]), PartitionError>
where
    F: FnMut(&T, &T) -> bool,
{
    unstable_partition(v, index, &SortConfig::default(), &mut is_less)?;

    let (left, right) = v.split_at_mut(index);
    let (nth, right) = right.split_at_mut(1);
    Ok((left, &mut nth[0], right))
}

/// Rank partition of any [`SortBuffer`], see [`partition`].
#[inline]
pub fn partition_buffer_by<T, B, F>(
    v: &mut B,
    index: usize,
    mut is_less: F,
) -> Result<(), PartitionError>
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    unstable_partition(v, index, &SortConfig::default(), &mut is_less)
}

/// Like [`partition_buffer_by`], with explicit tunables.
pub fn partition_buffer_with_config<T, B, F>(
    v: &mut B,
    index: usize,
    config: &SortConfig,
    mut is_less: F,
) -> Result<(), PartitionError>
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    config.validate()?;
    unstable_partition(v, index, config, &mut is_less)
}

/// Sorts the slice using heap sort, guaranteed *O*(*n* \* log(*n*)) regardless of the input.
#[inline]
pub fn heapsort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    heapsort_range_by(v, 0..len, T::lt);
}

#[inline]
pub fn heapsort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    heapsort_range_by(v, 0..len, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn heapsort_buffer_by<T, B, F>(v: &mut B, is_less: F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    heapsort_range_by(v, 0..len, is_less);
}

/// Heap sorts `v[range]`, leaving everything outside of it untouched.
///
/// # Panics
///
/// Panics if the range is decreasing or its end lies past `v.len()`, like slice indexing does.
pub fn heapsort_range_by<T, B, F>(v: &mut B, range: Range<usize>, mut is_less: F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(
        range.start <= range.end,
        "heapsort range starts at {} but ends at {}",
        range.start,
        range.end
    );
    assert!(
        range.end <= len,
        "heapsort range end {} out of range for buffer of length {}",
        range.end,
        len
    );

    if mem::size_of::<T>() == 0 {
        return;
    }

    heapsort::heapsort(v, range.start, range.end, &mut is_less);
}

// --- IMPL ---

#[inline]
fn unstable_sort<T, B, F>(v: &mut B, config: &SortConfig, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    quicksort::quicksort(v, config, is_less);
}

#[inline]
fn unstable_partition<T, B, F>(
    v: &mut B,
    index: usize,
    config: &SortConfig,
    is_less: &mut F,
) -> Result<(), PartitionError>
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if index >= len {
        return Err(PartitionError::IndexOutOfBounds { index, len });
    }

    if mem::size_of::<T>() != 0 {
        select::select(v, index, config, is_less);
    }

    Ok(())
}
