//! Post-allocation feasibility policy.

use crate::error::{CalcError, Result};
use crate::model::AllocationResult;

/// Reject allocations whose remainder is negative.
///
/// A negative remainder means the instructed lengths plus kerf loss already
/// exceed the measured slab. Surfacing that as a recoverable error keeps
/// physically nonsensical negative cut lengths out of the report.
pub fn ensure_feasible(alloc: &AllocationResult) -> Result<()> {
    if let Some(shortfall) = alloc.shortfall() {
        return Err(CalcError::InfeasibleAllocation { shortfall });
    }
    Ok(())
}
