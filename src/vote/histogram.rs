use serde::Serialize;

/// Per-axis vote counts, one bin per integer pixel coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VoteHistogram {
    bins: Vec<u32>,
}

impl VoteHistogram {
    pub fn new(len: usize) -> Self {
        Self { bins: vec![0; len] }
    }

    /// Resizes to `len` bins and zeroes every count, keeping the allocation.
    pub fn reset(&mut self, len: usize) {
        self.bins.clear();
        self.bins.resize(len, 0);
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[u32] {
        &self.bins
    }

    /// Floors `coord` to a bin index when it lies in `[0, len)`.
    #[inline]
    pub fn index_of(&self, coord: f32) -> Option<usize> {
        if coord >= 0.0 && coord < self.bins.len() as f32 {
            let idx = coord.floor() as usize;
            (idx < self.bins.len()).then_some(idx)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn increment(&mut self, idx: usize) {
        self.bins[idx] += 1;
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&v| v as u64).sum()
    }

    /// Adds another histogram of the same length bin by bin.
    pub fn merge(&mut self, other: &VoteHistogram) {
        debug_assert_eq!(self.bins.len(), other.bins.len());
        for (dst, &src) in self.bins.iter_mut().zip(other.bins.iter()) {
            *dst += src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VoteHistogram;

    #[test]
    fn index_of_floors_and_rejects_out_of_range() {
        let hist = VoteHistogram::new(10);
        assert_eq!(hist.index_of(0.0), Some(0));
        assert_eq!(hist.index_of(3.7), Some(3));
        assert_eq!(hist.index_of(9.999), Some(9));
        assert_eq!(hist.index_of(10.0), None);
        assert_eq!(hist.index_of(-0.1), None);
        assert_eq!(hist.index_of(f32::NAN), None);
    }

    #[test]
    fn reset_clears_counts_and_resizes() {
        let mut hist = VoteHistogram::new(4);
        hist.increment(2);
        hist.reset(6);
        assert_eq!(hist.len(), 6);
        assert_eq!(hist.total(), 0);
    }

    #[test]
    fn merge_adds_bins() {
        let mut a = VoteHistogram::new(3);
        let mut b = VoteHistogram::new(3);
        a.increment(0);
        b.increment(0);
        b.increment(2);
        a.merge(&b);
        assert_eq!(a.bins(), &[2, 0, 1]);
    }
}
