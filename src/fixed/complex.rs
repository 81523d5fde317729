use super::core::{bit_reverse_permute, generate_twiddles, radix_2_dit_fft_core, zip_parts};
use super::types::{ComplexFixed, Fixed, Q16};
use crate::common::{try_alloc, FftError};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use log::debug;

/// A transform of one fixed size over a borrowed twiddle table.
///
/// Building one is cheap; the expensive part is the table, which the caller owns.
/// Use [`transform`] to get a table scoped to a single call, or [`TwiddleCache`]
/// to reuse tables across calls.
#[derive(Debug, Clone, Copy)]
pub struct CplxFft<'a> {
    twiddles: &'a [ComplexFixed],
    n: usize,
}

impl<'a> CplxFft<'a> {
    /// `twiddles` must be the table from [`generate_twiddles`] for this same `n`.
    pub fn new(twiddles: &'a [ComplexFixed], n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }
        if twiddles.len() < n {
            return Err(FftError::BufferTooSmall);
        }
        if twiddles.len() > n {
            return Err(FftError::SizeMismatch);
        }

        Ok(Self { twiddles, n })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Transforms separate real and imaginary sequences into freshly allocated outputs.
    pub fn process(
        &self,
        x_real: &[Fixed],
        x_imag: &[Fixed],
    ) -> Result<(Vec<Fixed>, Vec<Fixed>), FftError> {
        check_lengths(self.n, x_real.len(), x_imag.len())?;
        let y = self.run(zip_parts(x_real, x_imag))?;
        split_parts(&y, |v| v)
    }

    /// Same as [`CplxFft::process`] for interleaved complex samples.
    pub fn process_complex(&self, input: &[ComplexFixed]) -> Result<Vec<ComplexFixed>, FftError> {
        if input.len() != self.n {
            return Err(FftError::SizeMismatch);
        }
        self.run(input.iter().copied())
    }

    /// Same as [`CplxFft::process`] over raw Q16.16 words.
    pub fn process_raw(
        &self,
        x_real: &[i32],
        x_imag: &[i32],
    ) -> Result<(Vec<i32>, Vec<i32>), FftError> {
        check_lengths(self.n, x_real.len(), x_imag.len())?;
        let input = x_real
            .iter()
            .zip(x_imag.iter())
            .map(|(&re, &im)| -> ComplexFixed { ComplexFixed::from_bits(re, im) });
        let y = self.run(input)?;
        split_parts(&y, Q16::to_bits)
    }

    fn run<I>(&self, input: I) -> Result<Vec<ComplexFixed>, FftError>
    where
        I: ExactSizeIterator<Item = ComplexFixed>,
    {
        let mut y = try_alloc(self.n)?;
        y.resize(self.n, ComplexFixed::default());

        bit_reverse_permute(input, &mut y);
        radix_2_dit_fft_core(&mut y, self.twiddles);

        Ok(y)
    }
}

fn check_lengths(n: usize, re_len: usize, im_len: usize) -> Result<(), FftError> {
    if re_len != n || im_len != n {
        return Err(FftError::SizeMismatch);
    }
    Ok(())
}

fn split_parts<T, F>(y: &[ComplexFixed], f: F) -> Result<(Vec<T>, Vec<T>), FftError>
where
    F: Fn(Fixed) -> T,
{
    let mut re = try_alloc(y.len())?;
    let mut im = try_alloc(y.len())?;
    for v in y {
        re.push(f(v.re));
        im.push(f(v.im));
    }
    Ok((re, im))
}

fn validate(n: usize, re_len: usize, im_len: usize) -> Result<(), FftError> {
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    check_lengths(n, re_len, im_len)
}

/// Computes the N-point FFT of `(x_real, x_imag)` in Q16.16.
///
/// The twiddle table is generated for this call and dropped before it returns.
/// Either every output bin is produced or an error is returned and nothing is.
///
/// # Errors
/// - [`FftError::NotPowerOfTwo`] if `n` is not a power of two (including 0)
/// - [`FftError::SizeMismatch`] if either input does not have exactly `n` samples
/// - [`FftError::AllocationFailure`] if the table or outputs cannot be allocated
pub fn transform(
    x_real: &[Fixed],
    x_imag: &[Fixed],
    n: usize,
) -> Result<(Vec<Fixed>, Vec<Fixed>), FftError> {
    validate(n, x_real.len(), x_imag.len())?;
    debug!("transform: n = {}", n);

    let twiddles = generate_twiddles(n)?;
    CplxFft::new(&twiddles, n)?.process(x_real, x_imag)
}

/// [`transform`] over raw Q16.16 words, for comparing against other implementations.
pub fn transform_raw(
    x_real: &[i32],
    x_imag: &[i32],
    n: usize,
) -> Result<(Vec<i32>, Vec<i32>), FftError> {
    validate(n, x_real.len(), x_imag.len())?;
    debug!("transform_raw: n = {}", n);

    let twiddles = generate_twiddles(n)?;
    CplxFft::new(&twiddles, n)?.process_raw(x_real, x_imag)
}

/// Twiddle tables kept between calls, keyed by transform size.
///
/// This is plain caller-owned state: pass it where repeated transforms of the
/// same sizes happen. Results are identical to [`transform`].
#[derive(Debug, Clone, Default)]
pub struct TwiddleCache {
    tables: BTreeMap<usize, Vec<ComplexFixed>>,
}

impl TwiddleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `n`, generating it on first use.
    pub fn table(&mut self, n: usize) -> Result<&[ComplexFixed], FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }
        if !self.tables.contains_key(&n) {
            debug!("twiddle cache miss: n = {}", n);
            let twiddles = generate_twiddles(n)?;
            self.tables.insert(n, twiddles);
        }
        Ok(&self.tables[&n])
    }

    pub fn plan(&mut self, n: usize) -> Result<CplxFft<'_>, FftError> {
        let twiddles = self.table(n)?;
        CplxFft::new(twiddles, n)
    }

    pub fn transform(
        &mut self,
        x_real: &[Fixed],
        x_imag: &[Fixed],
        n: usize,
    ) -> Result<(Vec<Fixed>, Vec<Fixed>), FftError> {
        validate(n, x_real.len(), x_imag.len())?;
        self.plan(n)?.process(x_real, x_imag)
    }

    /// Number of cached sizes.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
