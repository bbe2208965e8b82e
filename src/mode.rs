//! Windowed mode extraction over a 1-D vote histogram.
//!
//! The histogram is cut into fixed, non-overlapping windows of `tolerance`
//! bins starting at coordinate 0. The window with the strictly largest vote
//! sum wins and is represented by `window_start + tolerance / 2`. A trailing
//! window shorter than `tolerance` is never scored.
//!
//! This is coarse binning rather than a density estimate: a cluster that
//! straddles a window boundary is split in two. It is O(n) and deterministic.

/// Sentinel returned when no window collected any votes.
pub const MODE_NOT_FOUND: i32 = -1;

/// Returns the representative coordinate of the best-scoring window, or
/// [`MODE_NOT_FOUND`].
///
/// Ties keep the first window encountered. A `tolerance` of zero never
/// closes a window and therefore yields the sentinel.
pub fn extract_mode(histogram: &[u32], tolerance: usize) -> i32 {
    if tolerance == 0 {
        return MODE_NOT_FOUND;
    }
    let mut best_sum = 0u64;
    let mut coord = MODE_NOT_FOUND;
    for (window_idx, window) in histogram.chunks_exact(tolerance).enumerate() {
        let sum: u64 = window.iter().map(|&v| v as u64).sum();
        if sum > best_sum {
            best_sum = sum;
            coord = (window_idx * tolerance + tolerance / 2) as i32;
        }
    }
    coord
}

/// [`extract_mode`] with the sentinel folded into an `Option`.
pub fn find_mode(histogram: &[u32], tolerance: usize) -> Option<usize> {
    match extract_mode(histogram, tolerance) {
        MODE_NOT_FOUND => None,
        c => Some(c as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_has_no_mode() {
        assert_eq!(extract_mode(&[], 2), MODE_NOT_FOUND);
        assert_eq!(extract_mode(&[0; 800], 2), MODE_NOT_FOUND);
        assert_eq!(extract_mode(&[0; 7], 5), MODE_NOT_FOUND);
        assert_eq!(find_mode(&[0; 16], 4), None);
    }

    #[test]
    fn find_mode_wraps_coordinate() {
        let mut hist = vec![0u32; 16];
        hist[9] = 3;
        assert_eq!(find_mode(&hist, 4), Some(10));
        assert_eq!(find_mode(&hist, 0), None);
    }

    #[test]
    fn picks_window_with_largest_sum() {
        let mut hist = vec![0u32; 20];
        hist[3] = 1;
        hist[8] = 2;
        hist[9] = 2;
        hist[14] = 3;
        // windows of 5: [0..5)=1, [5..10)=4, [10..15)=3, [15..20)=0
        assert_eq!(extract_mode(&hist, 5), 5 + 2);
    }

    #[test]
    fn ties_keep_first_window() {
        let mut hist = vec![0u32; 12];
        hist[1] = 2;
        hist[7] = 2;
        assert_eq!(extract_mode(&hist, 4), 2);
    }

    #[test]
    fn trailing_partial_window_is_not_scored() {
        let mut hist = vec![0u32; 11];
        hist[0] = 1;
        hist[10] = 50;
        // windows of 3 cover [0..9); index 9 and 10 form a discarded tail.
        assert_eq!(extract_mode(&hist, 3), 1);

        let mut only_tail = vec![0u32; 7];
        only_tail[6] = 9;
        assert_eq!(extract_mode(&only_tail, 3), MODE_NOT_FOUND);
    }

    #[test]
    fn tolerance_one_returns_exact_bin() {
        let mut hist = vec![0u32; 10];
        hist[6] = 4;
        assert_eq!(extract_mode(&hist, 1), 6);
    }

    #[test]
    fn zero_tolerance_returns_sentinel() {
        assert_eq!(extract_mode(&[1, 2, 3], 0), MODE_NOT_FOUND);
    }

    #[test]
    fn representative_uses_integer_half_tolerance() {
        let mut hist = vec![0u32; 10];
        hist[4] = 1;
        // tolerance 2: window [4..6) -> 4 + 1
        assert_eq!(extract_mode(&hist, 2), 5);
        // tolerance 3: window [3..6) -> 3 + 1
        assert_eq!(extract_mode(&hist, 3), 4);
    }
}
