//! Request types: raw operator input and its validated form.

use serde::{Deserialize, Serialize};

use crate::config::MAX_GUIDES;

/// Raw text fields as entered by the operator.
///
/// No invariants hold here: any field may be empty or malformed. The engine
/// owns all numeric parsing and never assumes the UI pre-filtered anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRequest {
    /// Measured slab length text.
    pub slab_length: String,
    /// Instructed guide length texts, slot order 1..=3.
    pub guides: [String; MAX_GUIDES],
    /// Heat code fragment printed before the dash. Cosmetic only.
    pub code_front: String,
    /// Heat code fragment printed after the dash. Cosmetic only.
    pub code_back: String,
}

impl RawRequest {
    /// Create a request with a slab length text and empty guide slots.
    pub fn new(slab_length: impl Into<String>) -> Self {
        Self {
            slab_length: slab_length.into(),
            ..Default::default()
        }
    }

    /// Set a guide slot text (slot index 0..=2).
    pub fn set_guide(&mut self, slot: usize, text: impl Into<String>) {
        if slot < MAX_GUIDES {
            self.guides[slot] = text.into();
        }
    }
}

/// Numerically validated request.
///
/// Invariants: `slab_length > 0`; `guides` holds 2 or 3 positive values in
/// input-slot order. Slot order is preserved because position determines
/// segment numbering in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedRequest {
    /// Measured slab length in millimeters.
    pub slab_length: f64,
    /// Usable instructed lengths in millimeters, input order.
    pub guides: Vec<f64>,
    /// Trimmed heat code fragment before the dash (may be empty).
    pub code_front: String,
    /// Trimmed heat code fragment after the dash (may be empty).
    pub code_back: String,
}

impl ValidatedRequest {
    /// Number of segments the slab will be cut into.
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Sum of the instructed lengths.
    pub fn guide_sum(&self) -> f64 {
        self.guides.iter().sum()
    }
}
