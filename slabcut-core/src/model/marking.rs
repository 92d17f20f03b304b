//! Marking values used to annotate the cut diagram.

use serde::{Deserialize, Serialize};

/// Marking positions derived from an allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkingResult {
    /// Trailing half-kerf mark per segment, measured from the start of that
    /// segment's own allocated stock. Not cumulative. One per segment.
    pub per_segment_marks: Vec<f64>,
    /// Absolute cut-center positions along the full slab, one per saw cut
    /// (`n - 1` values, strictly increasing). Feeds the cut-centers report
    /// line.
    pub cumulative_centers: Vec<f64>,
}
