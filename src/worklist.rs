use std::ops::Range;

/// Maximum number of pending ranges.
///
/// The sort driver always pops the smaller child of a partition before the larger one, so every
/// stacked range is at most half as long as the one below it. Ranges with fewer than two elements
/// are never pushed, which bounds the depth by `log2(len) + 1 <= usize::BITS`.
pub(crate) const MAX_PENDING: usize = usize::BITS as usize;

/// A pending sub-problem, `start..end` into the buffer plus the partition budget left for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingRange {
    pub start: usize,
    pub end: usize,
    pub limit: Option<u32>,
}

impl PendingRange {
    #[inline]
    pub fn new(range: Range<usize>, limit: Option<u32>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            limit,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// LIFO collection of pending ranges, replacing recursion. Lives on the stack of a single call.
pub(crate) struct WorkList {
    ranges: [PendingRange; MAX_PENDING],
    len: usize,
}

impl WorkList {
    pub fn new(initial: PendingRange) -> Self {
        let mut work_list = Self {
            ranges: [PendingRange::new(0..0, None); MAX_PENDING],
            len: 0,
        };
        work_list.push(initial);
        work_list
    }

    #[inline]
    pub fn push(&mut self, range: PendingRange) {
        // Only reachable if a caller breaks the smaller-side-first discipline. Indexing would
        // panic anyway, this gives a better message.
        assert!(self.len < MAX_PENDING, "work-list overflow");

        self.ranges[self.len] = range;
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<PendingRange> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some(self.ranges[self.len])
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }
}
