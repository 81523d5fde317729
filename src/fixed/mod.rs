pub mod types;
mod core;
pub mod complex;

pub use self::core::{bit_reverse, generate_twiddles};
pub use complex::{transform, transform_raw, CplxFft, TwiddleCache};
pub use types::{from_fixed, to_fixed, ComplexFixed, Fixed, Q16};
