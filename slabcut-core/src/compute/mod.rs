//! Length allocation and marking calculations.

mod allocate;
mod marking;

pub use allocate::allocate;
pub use marking::compute_marks;
