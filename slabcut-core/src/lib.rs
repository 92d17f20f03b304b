//! slabcut-core - Length-allocation and marking engine for slab cutting.
//!
//! A measured steel slab rarely divides exactly into its 2-3 instructed cut
//! lengths once saw-kerf loss is accounted for. This library validates the
//! operator's raw input, spreads the leftover (or deficit) evenly across the
//! targets, derives the marking positions for the cut diagram, and renders a
//! settings-driven textual report.
//!
//! Every stage is a pure function over explicit value objects; the engine
//! performs no I/O and holds no state between calls.
//!
//! # Example
//!
//! ```
//! use slabcut_core::{calculate, Configuration, RawRequest};
//!
//! let mut raw = RawRequest::new("8030");
//! raw.set_guide(0, "4000");
//! raw.set_guide(1, "4000");
//!
//! let report = calculate(&raw, &Configuration::default()).unwrap();
//! assert!(report.contains("  1: 4,007.5 mm"));
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use compute::{allocate, compute_marks};
pub use config::{Configuration, DEFAULT_CUT_LOSS_MM};
pub use error::{CalcError, Result};
pub use model::{AllocationResult, MarkingResult, RawRequest, ValidatedRequest};
pub use parser::validate_request;
pub use report::{build_identifier, render_report};
pub use validation::ensure_feasible;

/// Run the full calculation pipeline.
///
/// 1. Validate the raw fields
/// 2. Allocate loss and slack across the guides
/// 3. Reject infeasible allocations
/// 4. Derive marking values
/// 5. Render the report
///
/// On failure the error's [`CalcError::user_message`] is the short text to
/// show the operator in place of the report.
pub fn calculate(raw: &RawRequest, config: &Configuration) -> Result<String> {
    let request = validate_request(raw)?;
    tracing::debug!(
        "validated request: slab {} mm, {} guides",
        request.slab_length,
        request.guide_count()
    );

    let alloc = allocate(&request, config.cut_loss);
    ensure_feasible(&alloc)?;
    tracing::debug!(
        "allocated: remainder {} mm, +{} mm per guide",
        alloc.remainder,
        alloc.per_guide_addition
    );

    let marks = compute_marks(&alloc, config.cut_loss);
    let identifier = build_identifier(&request, &config.identifier_prefix);

    Ok(render_report(&alloc, &marks, identifier.as_deref(), config))
}
