//! Configuration and constants for the cut calculation.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 1e-9;

/// Default material lost to the saw kerf per cut, in millimeters.
pub const DEFAULT_CUT_LOSS_MM: f64 = 15.0;

/// Minimum number of usable guide lengths per request.
pub const MIN_GUIDES: usize = 2;

/// Maximum number of guide length slots per request.
pub const MAX_GUIDES: usize = 3;

/// Default prefix for the heat code identifier line.
pub const DEFAULT_IDENTIFIER_PREFIX: &str = "SG94";

use serde::{Deserialize, Serialize};

/// Display and calculation settings, received as an immutable snapshot per
/// calculation. The engine never persists or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Material lost to the saw kerf per cut, in millimeters. Must be positive.
    pub cut_loss: f64,
    /// Round every displayed quantity half-up to a whole millimeter.
    pub round_to_integer: bool,
    /// Omit the " mm" suffix from displayed quantities.
    pub hide_unit_suffix: bool,
    /// Render the marking visualization block before the cut lengths block.
    pub swap_section_order: bool,
    /// Prefix for the heat code identifier line. Alphanumeric only.
    pub identifier_prefix: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            cut_loss: DEFAULT_CUT_LOSS_MM,
            round_to_integer: false,
            hide_unit_suffix: false,
            swap_section_order: false,
            identifier_prefix: DEFAULT_IDENTIFIER_PREFIX.to_string(),
        }
    }
}

impl Configuration {
    /// Create a configuration with a specific cut loss.
    pub fn with_cut_loss(cut_loss: f64) -> Self {
        Self {
            cut_loss,
            ..Default::default()
        }
    }
}

/// Strip everything but ASCII alphanumerics from an identifier prefix.
pub fn sanitize_identifier_prefix(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
