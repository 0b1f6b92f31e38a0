use crate::buffer::SortBuffer;
use crate::config::{SortConfig, SELECT_INSERTION_THRESHOLD};
use crate::heapsort::heapsort;
use crate::smallsort::insertion_sort;
use crate::worklist::{PendingRange, WorkList};

/// Reorders `v` such that the element at `index` is at its final sorted position, everything
/// before it is not greater and everything after it is not less.
///
/// The caller has to guarantee `index < v.len()`.
pub(crate) fn select<T, B, F>(v: &mut B, index: usize, config: &SortConfig, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(index < len);

    if index == len - 1 {
        // Find max element and place it in the last position of the buffer.
        let max_idx = max_index(v, is_less);
        v.swap(max_idx, index);
    } else if index == 0 {
        // Find min element and place it in the first position of the buffer.
        let min_idx = min_index(v, is_less);
        v.swap(min_idx, index);
    } else {
        select_loop(v, index, config, is_less);
    }
}

fn select_loop<T, B, F>(v: &mut B, index: usize, config: &SortConfig, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut work_list = WorkList::new(PendingRange::new(0..len, config.select_limit()));

    // Only one range is ever pending, the side of each partition not containing `index` is
    // dropped.
    while let Some(range) = work_list.pop() {
        let PendingRange { start, end, limit } = range;

        if range.len() <= SELECT_INSERTION_THRESHOLD {
            insertion_sort(v, start, end, is_less);
            return;
        }

        let limit = match limit {
            Some(0) => {
                heapsort(v, start, end, is_less);
                return;
            }
            Some(limit) => Some(limit - 1),
            None => None,
        };

        // Pivot from the middle of the range, parked at its end while partitioning.
        v.swap(start + range.len() / 2, end - 1);

        // If the pivot is equal to the predecessor, then it's the smallest element in the range.
        // Partition into elements equal to and elements greater than the pivot. This case is
        // usually hit when the slice contains many duplicate elements.
        if start > 0 && !is_less(v.get(start - 1), v.get(end - 1)) {
            let mid = partition_at_end(v, start, end, &mut |a: &T, b: &T| !is_less(b, a));

            // Everything in `v[start..=mid]` is equal, if that covers `index` we are done.
            if index <= mid {
                return;
            }

            work_list.push(PendingRange::new((mid + 1)..end, limit));
            continue;
        }

        let mid = partition_at_end(v, start, end, is_less);

        if index < mid {
            work_list.push(PendingRange::new(start..mid, limit));
        } else if index > mid {
            work_list.push(PendingRange::new((mid + 1)..end, limit));
        }
        // If mid == index, then we're done, since partition guaranteed that all elements after
        // mid are not less than the pivot.
    }
}

/// Partitions `v[start..end]` around the pivot at `v[end - 1]`, and returns its final position
/// `mid`. Elements in `v[start..mid]` compare true for `is_less(elem, pivot)`, the elements in
/// `v[mid + 1..end]` don't.
fn partition_at_end<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let pivot = end - 1;

    // Invariant: `v[start..left]` is less than the pivot, `v[right..pivot]` is not.
    let mut left = start;
    let mut right = pivot;

    while left < right {
        if is_less(v.get(left), v.get(pivot)) {
            left += 1;
        } else if !is_less(v.get(right - 1), v.get(pivot)) {
            right -= 1;
        } else {
            v.swap(left, right - 1);
            left += 1;
            right -= 1;
        }
    }

    v.swap(left, pivot);

    left
}

/// Returns the index of the minimum element, the first one if there are several.
fn min_index<T, B, F>(v: &B, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).fold(0, |acc, i| if is_less(v.get(i), v.get(acc)) { i } else { acc })
}

/// Returns the index of the maximum element, the first one if there are several.
fn max_index<T, B, F>(v: &B, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).fold(0, |acc, i| if is_less(v.get(acc), v.get(i)) { i } else { acc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Fallback;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn assert_selected(v: &[i32], index: usize) {
        let mut sorted = v.to_vec();
        sorted.sort();

        assert_eq!(v[index], sorted[index], "index {index}");
        assert!(v[..index].iter().all(|x| *x <= v[index]));
        assert!(v[index + 1..].iter().all(|x| *x >= v[index]));
    }

    #[test]
    fn partition_at_end_contract() {
        let mut v = vec![9, 2, 7, 4, 1, 8, 3, 5];
        let mid = partition_at_end(&mut v, 0, 8, &mut lt);
        assert_eq!(mid, 4);
        assert_eq!(v[mid], 5);
        assert!(v[..mid].iter().all(|x| *x < 5));
        assert!(v[mid + 1..].iter().all(|x| *x >= 5));

        let mut v = vec![3, 3, 3, 3];
        assert_eq!(partition_at_end(&mut v, 0, 4, &mut lt), 0);

        let mut v = vec![1, 2, 3];
        assert_eq!(partition_at_end(&mut v, 0, 3, &mut lt), 2);
    }

    #[test]
    fn min_max_index() {
        let v = [4, 1, 9, 1, 9, 0, 9];
        assert_eq!(min_index(&v[..], &mut lt), 5);
        assert_eq!(max_index(&v[..], &mut lt), 2);
        assert_eq!(min_index(&v[..1], &mut lt), 0);
    }

    #[test]
    fn every_index() {
        let input = (0..200).map(|x| (x * 7919) % 61).collect::<Vec<i32>>();
        for config in [SortConfig::default(), SortConfig::plain()] {
            for index in 0..input.len() {
                let mut v = input.clone();
                select(&mut v, index, &config, &mut lt);
                assert_selected(&v, index);
            }
        }
    }

    #[test]
    fn all_equal_is_linear() {
        let len = 10_000;
        let mut v = vec![7; len];
        let mut comps = 0;
        select(&mut v, len / 2, &SortConfig::plain(), &mut |a: &i32, b: &i32| {
            comps += 1;
            a < b
        });
        assert!(comps <= 4 * len, "took {comps} comparisons");
    }

    #[test]
    fn descending_with_fallback() {
        let config = SortConfig::default().with_fallback(Fallback::HeapSort);
        let mut v = (0..5_000).rev().collect::<Vec<i32>>();
        select(&mut v, 1_234, &config, &mut lt);
        assert_selected(&v, 1_234);
    }
}
