use std::collections::VecDeque;

/// Index-addressable, swappable storage the sort and select drivers operate on.
///
/// The drivers never move an element out of the storage, every reordering is expressed as a
/// `swap`. That keeps the buffer a valid permutation of its input at every point in time, even if
/// the comparison function panics half-way through.
///
/// All three operations are expected to be O(1). Out-of-range indices must panic, the drivers only
/// ever produce them if the implementation reports a wrong `len`.
pub trait SortBuffer<T> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> &T;

    fn swap(&mut self, a: usize, b: usize);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SortBuffer<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> SortBuffer<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Two contiguous halves internally, which is exactly the kind of storage that can't be handed out
// as `&mut [T]`.
impl<T> SortBuffer<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse_via_swaps<B: SortBuffer<i32> + ?Sized>(buf: &mut B) {
        let len = buf.len();
        for i in 0..(len / 2) {
            buf.swap(i, len - 1 - i);
        }
    }

    #[test]
    fn slice_vec_and_deque_agree() {
        let mut arr = [1, 2, 3, 4, 5];
        let mut vec = arr.to_vec();
        let mut deque: VecDeque<i32> = VecDeque::with_capacity(8);

        // Force the deque to wrap around its ring buffer.
        for _ in 0..6 {
            deque.push_back(0);
            deque.pop_front();
        }
        deque.extend(arr.iter().copied());

        reverse_via_swaps(arr.as_mut_slice());
        reverse_via_swaps(&mut vec);
        reverse_via_swaps(&mut deque);

        assert_eq!(arr, [5, 4, 3, 2, 1]);
        assert_eq!(vec, arr);
        assert!(deque.iter().eq(arr.iter()));
        assert_eq!(*SortBuffer::get(&deque, 0), 5);
    }

    #[test]
    fn empty() {
        let v: Vec<u8> = Vec::new();
        assert!(SortBuffer::is_empty(&v));
        assert!(SortBuffer::is_empty(&[0u8; 0][..]));
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let v = vec![1, 2, 3];
        let _ = SortBuffer::get(&v, 3);
    }
}
