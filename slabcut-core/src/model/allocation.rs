//! Allocation result: how the slack is spread across the segments.

use serde::{Deserialize, Serialize};

/// Result of distributing kerf loss and slack across the guide lengths.
///
/// Derived deterministically from a validated request and the cut loss.
/// Carries the request quantities forward so the report can restate them.
/// `remainder` may be negative; the feasibility policy decides whether that
/// is surfaced to the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Measured slab length in millimeters.
    pub slab_length: f64,
    /// Instructed lengths in millimeters, input order.
    pub guides: Vec<f64>,
    /// Total kerf loss: `cut_loss * (n - 1)`.
    pub total_loss: f64,
    /// Leftover (or deficit, when negative) after guides and loss.
    pub remainder: f64,
    /// Uniform addition applied to every guide: `remainder / n`.
    pub per_guide_addition: f64,
    /// Physical cut length per segment, input order.
    pub real_lengths: Vec<f64>,
}

impl AllocationResult {
    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.real_lengths.len()
    }

    /// Number of saw cuts between segments.
    pub fn cut_count(&self) -> usize {
        self.real_lengths.len().saturating_sub(1)
    }

    /// How far the request overshoots the slab, when it does.
    pub fn shortfall(&self) -> Option<f64> {
        (self.remainder < 0.0).then_some(-self.remainder)
    }
}
