use crate::buffer::SortBuffer;

// --- Sorting networks ---

/// Swap the values at position `a` and `b` if the value at position `b` is less than the one at
/// position `a`.
#[inline(always)]
fn swap_if_less<T, B, F>(v: &mut B, a: usize, b: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    // Important to only swap if it is more and not if it is equal. is_less should return false for
    // equal, so we don't swap.
    if is_less(v.get(b), v.get(a)) {
        v.swap(a, b);
    }
}

/// Orders `a`, `b` and `c`, under the assumption that `b` and `c` are already ordered.
///
/// At most two comparisons, `a` is moved into place behind the pair.
#[inline(always)]
fn sort3_partial<T, B, F>(v: &mut B, a: usize, b: usize, c: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    swap_if_less(v, a, b, is_less);
    swap_if_less(v, b, c, is_less);
}

fn sort2<T, B, F>(v: &mut B, base: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    swap_if_less(v, base, base + 1, is_less);
}

fn sort3<T, B, F>(v: &mut B, base: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    swap_if_less(v, base + 1, base + 2, is_less);
    sort3_partial(v, base, base + 1, base + 2, is_less);
}

fn sort4<T, B, F>(v: &mut B, base: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    // Optimal sorting network see:
    // https://bertdobbelaere.github.io/sorting_networks.html.
    swap_if_less(v, base, base + 2, is_less);
    swap_if_less(v, base + 1, base + 3, is_less);
    swap_if_less(v, base, base + 1, is_less);
    swap_if_less(v, base + 2, base + 3, is_less);
    swap_if_less(v, base + 1, base + 2, is_less);
}

fn sort5<T, B, F>(v: &mut B, base: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let [x0, x1, x2, x3, x4] = [base, base + 1, base + 2, base + 3, base + 4];

    swap_if_less(v, x0, x1, is_less);
    swap_if_less(v, x3, x4, is_less);
    // x2 joins the sorted pair x3 <= x4.
    sort3_partial(v, x2, x3, x4, is_less);
    // x4 now holds the maximum.
    swap_if_less(v, x1, x4, is_less);
    sort3_partial(v, x0, x2, x3, is_less);
    sort3_partial(v, x1, x2, x3, is_less);
}

/// Sorts `v[start..end]` with a fixed sorting network, for ranges of at most
/// [`crate::config::MAX_NETWORK_LEN`] elements. Shorter ranges than two are left untouched.
pub(crate) fn sort_network<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    match end - start {
        0 | 1 => {}
        2 => sort2(v, start, is_less),
        3 => sort3(v, start, is_less),
        4 => sort4(v, start, is_less),
        5 => sort5(v, start, is_less),
        len => unreachable!("no sorting network for len {len}"),
    }
}

// --- Insertion sort ---

/// Sorts `v[start..end]` using insertion sort, which is *O*(*n*^2) worst-case and *O*(*n*) for
/// already sorted input.
///
/// Each new element is carried left past every predecessor that is not strictly before it. Moving
/// it with swaps instead of a hole keeps the buffer a permutation of its input if `is_less`
/// panics.
pub(crate) fn insertion_sort<T, B, F>(v: &mut B, start: usize, end: usize, is_less: &mut F)
where
    B: SortBuffer<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    for i in (start + 1)..end {
        let mut j = i;
        while j > start && !is_less(v.get(j - 1), v.get(j)) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
