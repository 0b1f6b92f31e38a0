use std::cmp::Ordering;

/// A kilobyte of payload, moving one around is far more expensive than comparing two.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OneKiloByte {
    payload: [i64; 128],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let base = std::hint::black_box(val as i64);
        Self {
            payload: std::array::from_fn(|i| base + i as i64),
        }
    }

    // Reads a few spread out words, so the comparison touches more than one cache line.
    fn key(&self) -> i64 {
        self.payload[3] + self.payload[64] + self.payload[127]
    }
}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Two floats whose quotient is the sort key, cheap to copy and comparatively slow to compare.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct F128 {
    x: f64,
    y: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        // Shifted well above e, where x / ln(x) grows with x.
        let shifted = val as f64 - i32::MIN as f64 + 16.0;
        let x = shifted + 0.25;
        let y = shifted.log(3.7);
        debug_assert!(x.is_normal() && y.is_normal() && y < x);

        Self { x, y }
    }

    fn ratio(&self) -> f64 {
        self.x / self.y
    }
}

// Only normal floats are ever constructed, see `F128::new`.
impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ratio().total_cmp(&other.ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_follows_source_value() {
        let mut vals = [5, -3, i32::MAX, i32::MIN, 0];
        let mut f128 = vals.iter().map(|v| F128::new(*v)).collect::<Vec<_>>();
        let mut large = vals.iter().map(|v| OneKiloByte::new(*v)).collect::<Vec<_>>();

        vals.sort();
        f128.sort();
        large.sort();

        assert_eq!(f128, vals.iter().map(|v| F128::new(*v)).collect::<Vec<_>>());
        assert_eq!(
            large,
            vals.iter().map(|v| OneKiloByte::new(*v)).collect::<Vec<_>>()
        );
    }
}
