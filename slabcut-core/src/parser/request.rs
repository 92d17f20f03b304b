//! Request validation.

use crate::config::MIN_GUIDES;
use crate::error::{CalcError, Result};
use crate::model::{RawRequest, ValidatedRequest};

use super::number::parse_field;

/// Validate a raw request into numeric form.
///
/// The slab length must parse and be positive. Guide slots are parsed
/// independently; a slot that is empty, non-numeric, or not positive is
/// silently excluded, and only the surviving count is checked against the
/// two-guide minimum. Slot order is preserved.
pub fn validate_request(raw: &RawRequest) -> Result<ValidatedRequest> {
    let slab_length = parse_field(&raw.slab_length)
        .filter(|v| *v > 0.0)
        .ok_or_else(|| CalcError::InvalidSlabLength {
            value: raw.slab_length.trim().to_string(),
        })?;

    let guides: Vec<f64> = raw
        .guides
        .iter()
        .filter_map(|text| parse_field(text))
        .filter(|v| *v > 0.0)
        .collect();

    if guides.len() < MIN_GUIDES {
        return Err(CalcError::InsufficientGuides {
            count: guides.len(),
        });
    }

    Ok(ValidatedRequest {
        slab_length,
        guides,
        code_front: raw.code_front.trim().to_string(),
        code_back: raw.code_back.trim().to_string(),
    })
}
