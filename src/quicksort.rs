use crate::buffer::SortBuffer;
use crate::config::{SortConfig, MAX_NETWORK_LEN};
use crate::heapsort::heapsort;
use crate::smallsort::{insertion_sort, sort_network};
use crate::worklist::{PendingRange, WorkList};

/// Sorts `v` with an iterative quicksort, driven by an explicit work-list of pending ranges.
///
/// Every popped range is either finished right away, by a sorting network, insertion sort or
/// the heap sort fallback, or partitioned around a median-of-3 pivot with its non-trivial sides
/// pushed back onto the work-list.
pub(crate) fn quicksort<T, B, F>(v: &mut B, config: &SortConfig, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut work_list = WorkList::new(PendingRange::new(0..len, config.sort_limit(len)));

    while let Some(range) = work_list.pop() {
        let PendingRange { start, end, limit } = range;
        let len = range.len();

        if len <= MAX_NETWORK_LEN {
            sort_network(v, start, end, is_less);
            continue;
        }

        if len < config.small_sort_threshold {
            insertion_sort(v, start, end, is_less);
            continue;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        let limit = match limit {
            Some(0) => {
                heapsort(v, start, end, is_less);
                continue;
            }
            Some(limit) => Some(limit - 1),
            None => None,
        };

        let pivot_pos = choose_pivot(v, start, end, is_less);
        v.swap(start, pivot_pos);

        // `v[start - 1]` is the pivot of an earlier partition and no element in this range is
        // less than it. If the chosen pivot isn't greater either, the range starts with a run of
        // elements equal to its predecessor. Partition into elements equal to and elements
        // greater than the pivot, the equal ones are done.
        if start > 0 && !is_less(v.get(start - 1), v.get(start)) {
            let mid = partition_left(v, start, end, is_less);
            push_unsorted(&mut work_list, PendingRange::new((mid + 1)..end, limit));
            continue;
        }

        let mid = partition_right(v, start, end, is_less);

        let left = PendingRange::new(start..mid, limit);
        let right = PendingRange::new((mid + 1)..end, limit);

        // The smaller side is popped first, that's what bounds the work-list depth.
        let (larger, smaller) = if left.len() < right.len() {
            (right, left)
        } else {
            (left, right)
        };
        push_unsorted(&mut work_list, larger);
        push_unsorted(&mut work_list, smaller);
    }
}

#[inline]
fn push_unsorted(work_list: &mut WorkList, range: PendingRange) {
    if range.len() > 1 {
        work_list.push(range);
    }
}

/// Returns the position of the median of `v[start + len / 2]`, `v[start]` and `v[end - 1]`.
fn choose_pivot<T, B, F>(v: &B, start: usize, end: usize, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let a = start + (end - start) / 2;
    let b = start;
    let c = end - 1;

    if is_less(v.get(a), v.get(b)) {
        if is_less(v.get(b), v.get(c)) {
            b
        } else if is_less(v.get(a), v.get(c)) {
            c
        } else {
            a
        }
    } else if is_less(v.get(a), v.get(c)) {
        a
    } else if is_less(v.get(b), v.get(c)) {
        c
    } else {
        b
    }
}

/// Partitions `v[start..end]` around the pivot at `v[start]`, and returns the final position `mid`
/// of the pivot.
///
/// All elements in `v[start..mid]` are less than the pivot, all elements in `v[mid + 1..end]` are
/// not.
pub(crate) fn partition_right<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    partition_at_start(v, start, end, is_less)
}

/// Partitions `v[start..end]` around the pivot at `v[start]`, and returns the final position `mid`
/// of the pivot.
///
/// All elements in `v[start..mid]` are not greater than the pivot, all elements in
/// `v[mid + 1..end]` are greater. If the pivot is the smallest element of the range, the left side
/// contains exactly the elements equal to it.
pub(crate) fn partition_left<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    partition_at_start(v, start, end, &mut |a: &T, b: &T| !is_less(b, a))
}

/// Two cursor partition. `left` scans forward over elements that belong on the left side, `right`
/// scans backward over elements that belong on the right side, misplaced pairs are swapped. Once
/// the cursors cross the pivot is swapped into the boundary.
///
/// If `is_less` does not implement a total order the resulting order and return value are
/// unspecified. All original elements will remain in `v`, and the returned position is always in
/// `start..end`.
fn partition_at_start<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F) -> usize
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(end - start >= 1);

    let mut left = start + 1;
    let mut right = end - 1;

    loop {
        while left <= right && is_less(v.get(left), v.get(start)) {
            left += 1;
        }

        // `right >= left > start`, so this can't underflow below `start`.
        while left <= right && !is_less(v.get(right), v.get(start)) {
            right -= 1;
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
        left += 1;
        right -= 1;
    }

    // Place the pivot between the two partitions.
    v.swap(start, right);

    right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Fallback;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn median_of_three() {
        // start, mid, end - 1
        assert_eq!(choose_pivot(&[1, 0, 2, 0, 3][..], 0, 5, &mut lt), 2);
        assert_eq!(choose_pivot(&[3, 0, 1, 0, 2][..], 0, 5, &mut lt), 4);
        assert_eq!(choose_pivot(&[2, 0, 3, 0, 1][..], 0, 5, &mut lt), 0);
        assert_eq!(choose_pivot(&[7, 7, 7, 7][..], 0, 4, &mut lt), 0);
        assert_eq!(choose_pivot(&[9, 9, 1, 5, 3, 9][..], 2, 5, &mut lt), 4);
    }

    #[test]
    fn partition_right_contract() {
        let mut v = vec![4, 9, 4, 1, 7, 3, 4, 8, 0, 4];
        let len = v.len();
        let mid = partition_right(&mut v, 0, len, &mut lt);

        assert_eq!(v[mid], 4);
        assert_eq!(mid, 3);
        assert!(v[..mid].iter().all(|x| *x < 4));
        assert!(v[mid + 1..].iter().all(|x| *x >= 4));
    }

    #[test]
    fn partition_left_contract() {
        let mut v = vec![4, 9, 4, 1, 7, 3, 4, 8, 0, 4];
        let len = v.len();
        let mid = partition_left(&mut v, 0, len, &mut lt);

        assert_eq!(v[mid], 4);
        assert_eq!(mid, 6);
        assert!(v[..mid].iter().all(|x| *x <= 4));
        assert!(v[mid + 1..].iter().all(|x| *x > 4));
    }

    #[test]
    fn partition_left_collapses_equal_run() {
        // Pivot is the minimum, so the left side is exactly the equal run.
        let mut v = vec![2, 5, 2, 9, 2, 2, 7, 2];
        let mid = partition_left(&mut v, 0, 8, &mut lt);
        assert_eq!(mid, 4);
        assert_eq!(&v[..=mid], &[2, 2, 2, 2, 2]);
    }

    #[test]
    fn partition_extremes() {
        let mut v = vec![0, 5, 6, 7];
        assert_eq!(partition_right(&mut v, 0, 4, &mut lt), 0);

        let mut v = vec![9, 5, 6, 7];
        assert_eq!(partition_right(&mut v, 0, 4, &mut lt), 3);
        assert_eq!(v[3], 9);

        let mut v = vec![3];
        assert_eq!(partition_left(&mut v, 0, 1, &mut lt), 0);
    }

    #[test]
    fn partition_sub_range() {
        let mut v = vec![100, 5, 8, 1, 9, 2, -100];
        let mid = partition_right(&mut v, 1, 6, &mut lt);
        assert_eq!(mid, 3);
        assert_eq!(v[0], 100);
        assert_eq!(v[6], -100);
        assert_eq!(v[mid], 5);
    }

    #[test]
    fn sorts_with_every_config() {
        let input = (0..1_000).map(|x| (x * 7919) % 127).collect::<Vec<i32>>();
        let mut expected = input.clone();
        expected.sort();

        for config in [
            SortConfig::default(),
            SortConfig::plain(),
            SortConfig::default().with_small_sort_threshold(6),
            SortConfig::plain().with_small_sort_threshold(200),
        ] {
            let mut v = input.clone();
            quicksort(&mut v, &config, &mut lt);
            assert_eq!(v, expected, "{config:?}");
        }
    }

    #[test]
    fn median_of_3_killer() {
        // Classic adversarial layout for median-of-3 pivoting: every partition only peels off a
        // couple of elements. Both with and without fallback the result must be sorted, and the
        // work-list must not overflow.
        let len = 4_096;
        let mut input = vec![0; len];
        let half = len / 2;
        for i in 0..half {
            let i = i as i32;
            if i % 2 == 0 {
                input[i as usize] = i + 1;
            } else {
                input[i as usize] = half as i32 + i + (half as i32 % 2);
            }
            input[half + i as usize] = 2 * (i + 1);
        }

        let mut expected = input.clone();
        expected.sort();

        for fallback in [Fallback::None, Fallback::HeapSort] {
            let mut v = input.clone();
            quicksort(&mut v, &SortConfig::default().with_fallback(fallback), &mut lt);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn all_equal_is_linear() {
        let len = 10_000;
        let mut v = vec![7; len];
        let mut comps = 0;
        quicksort(&mut v, &SortConfig::plain(), &mut |a: &i32, b: &i32| {
            comps += 1;
            a < b
        });

        // 3 for the first pivot, len for each partition plus the predecessor probe.
        assert!(comps <= 3 * len, "took {comps} comparisons");
    }
}
