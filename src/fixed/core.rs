// src/fixed/core.rs

use super::types::{ComplexFixed, Fixed, Q16};
use crate::common::{try_alloc, FftError};
use alloc::vec::Vec;
use core::f64::consts::PI;
use log::trace;

/// Computes the rotation factors (Twiddle Factors) for an FFT of size N.
///
/// Entry k holds `e^(-2*pi*i*k/N)` truncated to Q16.16. The full circle is generated
/// (N entries), although the butterflies only ever read the first half.
/// `libm` is used on every target so the table is the same bit for bit everywhere.
pub fn generate_twiddles(n: usize) -> Result<Vec<ComplexFixed>, FftError> {
    let mut twiddles = try_alloc(n)?;
    for k in 0..n {
        let angle = -2.0 * PI * (k as f64) / (n as f64);
        twiddles.push(ComplexFixed::new(
            Q16::from_f64(libm::cos(angle)),
            Q16::from_f64(libm::sin(angle)),
        ));
    }
    Ok(twiddles)
}

/// Reverses the `bits` low-order bits of `index`.
///
/// Only meaningful for `index < 2^bits`; higher bits are ignored.
#[inline]
pub fn bit_reverse(mut index: usize, bits: u32) -> usize {
    let mut result = 0;
    for _ in 0..bits {
        result = (result << 1) | (index & 1);
        index >>= 1;
    }
    result
}

/// Number of butterfly stages for a power-of-two size.
#[inline]
pub(crate) fn log2(n: usize) -> u32 {
    n.trailing_zeros()
}

/// Scatters the input into `output` so that `output[bit_reverse(i)] = input(i)`.
///
/// `output` must already hold `input.len()` elements; every one of them is overwritten.
pub(crate) fn bit_reverse_permute<I>(input: I, output: &mut [ComplexFixed])
where
    I: ExactSizeIterator<Item = ComplexFixed>,
{
    let bits = log2(output.len());
    for (i, value) in input.enumerate() {
        output[bit_reverse(i, bits)] = value;
    }
}

/// Radix-2 Decimation-in-Time butterfly network over a bit-reversed buffer.
///
/// # Arguments
/// - `buffer`: bit-reversed input, transformed in place
/// - `twiddles`: table of at least `buffer.len() / 2` factors for size `buffer.len()`
///
/// Stage `s` reads what stage `s - 1` wrote, so stages run strictly in order.
/// Inside a stage every `(k, j)` pair touches its own two slots.
pub(crate) fn radix_2_dit_fft_core(buffer: &mut [ComplexFixed], twiddles: &[ComplexFixed]) {
    let n = buffer.len();
    let bits = log2(n);

    for stage in 1..=bits {
        let m = 1usize << stage;
        let half_m = m >> 1;

        for k in (0..n).step_by(m) {
            for j in 0..half_m {
                let w = twiddles[(j * n) / m];

                let even_idx = k + j;
                let odd_idx = k + j + half_m;

                // Both outputs need the value from before this butterfly
                let even = buffer[even_idx];
                let product = buffer[odd_idx] * w;

                buffer[even_idx] = even + product;
                buffer[odd_idx] = even - product;
            }
        }
        trace!("butterfly stage {}/{} done (m = {})", stage, bits, m);
    }
}

/// Zips separate real/imaginary slices into complex samples.
pub(crate) fn zip_parts<'a>(
    re: &'a [Fixed],
    im: &'a [Fixed],
) -> impl ExactSizeIterator<Item = ComplexFixed> + 'a {
    re.iter().zip(im.iter()).map(|(&re, &im)| ComplexFixed::new(re, im))
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
