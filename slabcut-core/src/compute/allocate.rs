//! Slack distribution across the guide lengths.

use crate::model::{AllocationResult, ValidatedRequest};

/// Distribute kerf loss and slack evenly across the guides.
///
/// The leftover after instructed lengths and total kerf loss is split
/// uniformly: `real_lengths[i] = guides[i] + remainder / n`, so that
/// `sum(real_lengths) + total_loss == slab_length` to f64 precision.
///
/// Evaluation order matters for floating-point reproducibility; do not
/// reorder the arithmetic. No rounding happens here (rounding is a display
/// concern) and a negative remainder is not rejected here (the feasibility
/// policy is the caller's).
pub fn allocate(request: &ValidatedRequest, cut_loss: f64) -> AllocationResult {
    let n = request.guide_count();
    let total_loss = cut_loss * (n as f64 - 1.0);
    let remainder = request.slab_length - (request.guide_sum() + total_loss);
    let per_guide_addition = remainder / n as f64;
    let real_lengths = request
        .guides
        .iter()
        .map(|g| g + per_guide_addition)
        .collect();

    AllocationResult {
        slab_length: request.slab_length,
        guides: request.guides.clone(),
        total_loss,
        remainder,
        per_guide_addition,
        real_lengths,
    }
}
