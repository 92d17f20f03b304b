//! Marking positions for the cut diagram.

use crate::model::{AllocationResult, MarkingResult};

/// Derive marking values from an allocation.
///
/// Per-segment marks place the trailing half-kerf mark relative to each
/// segment's own stock: `real_lengths[i] + cut_loss / 2`. Every segment
/// gets one, including the last.
///
/// Cumulative centers walk the full slab: each saw cut's center sits half a
/// kerf past the end of the segment before it, and the next segment starts
/// another half kerf later. Only the first `n - 1` segments have a trailing
/// cut.
pub fn compute_marks(alloc: &AllocationResult, cut_loss: f64) -> MarkingResult {
    let half_kerf = cut_loss / 2.0;

    let per_segment_marks = alloc
        .real_lengths
        .iter()
        .map(|real| real + half_kerf)
        .collect();

    let mut cumulative_centers = Vec::with_capacity(alloc.cut_count());
    if let Some((_, leading)) = alloc.real_lengths.split_last() {
        let mut acc = 0.0;
        for real in leading {
            acc += real + half_kerf;
            cumulative_centers.push(acc);
            acc += half_kerf;
        }
    }

    MarkingResult {
        per_segment_marks,
        cumulative_centers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    fn alloc(real_lengths: &[f64]) -> AllocationResult {
        let n = real_lengths.len() as f64;
        AllocationResult {
            slab_length: real_lengths.iter().sum::<f64>() + 15.0 * (n - 1.0),
            guides: real_lengths.to_vec(),
            total_loss: 15.0 * (n - 1.0),
            remainder: 0.0,
            per_guide_addition: 0.0,
            real_lengths: real_lengths.to_vec(),
        }
    }

    // ==================== per-segment marks ====================

    #[test]
    fn test_marks_two_segments() {
        let marks = compute_marks(&alloc(&[4007.5, 4007.5]), 15.0);
        assert_eq!(marks.per_segment_marks, vec![4015.0, 4015.0]);
    }

    #[test]
    fn test_marks_are_per_segment_not_cumulative() {
        let marks = compute_marks(&alloc(&[4107.5, 3907.5]), 15.0);
        assert_eq!(marks.per_segment_marks, vec![4115.0, 3915.0]);
    }

    #[test]
    fn test_last_segment_also_marked() {
        let marks = compute_marks(&alloc(&[4000.0, 4000.0, 4000.0]), 15.0);
        assert_eq!(marks.per_segment_marks.len(), 3);
    }

    // ==================== cumulative centers ====================

    #[test]
    fn test_centers_two_segments() {
        let marks = compute_marks(&alloc(&[4007.5, 4007.5]), 15.0);
        assert_eq!(marks.cumulative_centers, vec![4015.0]);
    }

    #[test]
    fn test_centers_three_segments() {
        // First center: 4000 + 7.5. Second: 4000 + 7.5 + 7.5 further on.
        let marks = compute_marks(&alloc(&[4000.0, 4000.0, 4000.0]), 15.0);
        assert_eq!(marks.cumulative_centers.len(), 2);
        assert!(approx_eq(marks.cumulative_centers[0], 4007.5));
        assert!(approx_eq(marks.cumulative_centers[1], 8022.5));
    }

    #[test]
    fn test_centers_increase() {
        let marks = compute_marks(&alloc(&[3000.0, 4000.0, 5000.0]), 15.0);
        assert!(marks.cumulative_centers[0] < marks.cumulative_centers[1]);
    }

    #[test]
    fn test_centers_land_mid_kerf() {
        // Each center sits exactly half a kerf past the segment it follows.
        let marks = compute_marks(&alloc(&[3000.0, 4000.0]), 10.0);
        assert!(approx_eq(marks.cumulative_centers[0], 3005.0));
    }
}
