//! Radix-2 FFT in Q16.16 fixed-point arithmetic.
//!
//! Every operation is integer-only after the twiddle table is built, and the table
//! itself is computed with `libm`, so a given input produces the same output words
//! on every platform. That makes the results usable as golden vectors for other
//! implementations of the same algorithm (assembly, HDL).
//!
//! ```
//! use q16_fft::{transform, Q16};
//!
//! let re = [Q16::from_f64(1.0), Q16::zero(), Q16::zero(), Q16::zero()];
//! let im = [Q16::zero(); 4];
//! let (y_re, y_im) = transform(&re, &im, 4).unwrap();
//! assert!(y_re.iter().all(|&v| v == Q16::from_f64(1.0)));
//! assert!(y_im.iter().all(|&v| v == Q16::zero()));
//! ```
#![no_std]

extern crate alloc;

// The standard library is only linked for the harness and for tests,
// so 'cargo test' works normally on a PC.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fixed;
#[cfg(feature = "std")]
pub mod harness;

pub use common::FftError;
pub use fixed::{
    bit_reverse, from_fixed, generate_twiddles, to_fixed, transform, transform_raw, ComplexFixed,
    CplxFft, Fixed, TwiddleCache, Q16,
};
