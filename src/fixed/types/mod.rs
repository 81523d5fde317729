mod fixed;
mod fixed_complex;

pub use fixed::{from_fixed, to_fixed, Fixed, Q16};
pub use fixed_complex::ComplexFixed;
