use crate::buffer::SortBuffer;

/// Sorts `v[start..end]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Never inline this, it sits in the main driver loops and is meant as unlikely algorithmic
/// fallback.
#[inline(never)]
pub(crate) fn heapsort<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = end - start;
    if len < 2 {
        return;
    }

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(v, start, node, len, is_less);
    }

    // Pop maximal elements from the heap.
    for heap_len in (1..len).rev() {
        v.swap(start, start + heap_len);
        sift_down(v, start, 0, heap_len, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`. `node` and its children are offsets
// relative to `base`, the heap occupies `v[base..base + heap_len]`.
fn sift_down<T, B, F>(v: &mut B, base: usize, mut node: usize, heap_len: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= heap_len {
            break;
        }

        // Choose the greater child.
        if child + 1 < heap_len {
            child += is_less(v.get(base + child), v.get(base + child + 1)) as usize;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(v.get(base + node), v.get(base + child)) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        v.swap(base + node, base + child);
        node = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap(v: &[i32]) -> bool {
        (1..v.len()).all(|i| v[(i - 1) / 2] >= v[i])
    }

    #[test]
    fn sift_down_builds_max_heap() {
        let mut v = vec![1, 9, 3, 7, 5, 8, 2, 6, 4];
        let len = v.len();
        for node in (0..len / 2).rev() {
            sift_down(&mut v, 0, node, len, &mut |a: &i32, b: &i32| a < b);
        }
        assert!(is_max_heap(&v));
        assert_eq!(v[0], 9);
    }

    #[test]
    fn sorts_whole_buffer() {
        for len in 0..70 {
            let mut v = (0..len).map(|x| (x * 7919) % 31).collect::<Vec<i32>>();
            let mut expected = v.clone();
            expected.sort();

            heapsort(&mut v, 0, len as usize, &mut |a: &i32, b: &i32| a < b);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn sorts_sub_range_only() {
        let mut v = [100, 5, 3, 3, 1, 4, 1, 5, 9, 2, 6, -100];
        heapsort(v.as_mut_slice(), 1, 11, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(v, [100, 1, 1, 2, 3, 3, 4, 5, 5, 6, 9, -100]);
    }

    #[test]
    fn reverse_order() {
        let mut v = vec![3, 1, 2, 5, 4];
        heapsort(&mut v, 0, 5, &mut |a: &i32, b: &i32| b < a);
        assert_eq!(v, [5, 4, 3, 2, 1]);
    }
}
