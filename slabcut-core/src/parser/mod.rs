//! Input validation: raw text fields into a validated request.

mod number;
mod request;

pub use number::parse_field;
pub use request::validate_request;
