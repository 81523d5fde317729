//! Everything around the transform that touches the outside world: the
//! demonstration signal, the results file used to compare implementations bin by bin,
//! the assembly twiddle tables, the simulator dump reader and the console report.
//!
//! None of this changes a single output word of the transform.

use crate::common::FftError;
use crate::fixed::{ComplexFixed, Fixed, Q16};
use core::f64::consts::PI;
use log::{info, warn};
use num_complex::Complex32;
use std::fmt;
use std::format;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::Path;
use std::string::String;
use std::time::Duration;
use std::vec::Vec;

/// Number of bins shown by [`write_report`].
pub const PREVIEW_BINS: usize = 8;

/// A complex exponential at bin `freq`:
/// `real[t] = cos(2*pi*f*t/n)`, `imag[t] = sin(2*pi*f*t/n)`, truncated to Q16.16.
pub fn complex_tone(n: usize, freq: usize) -> (Vec<Fixed>, Vec<Fixed>) {
    (0..n)
        .map(|t| {
            let angle = 2.0 * PI * (freq as f64) * (t as f64) / (n as f64);
            (Q16::from_f64(libm::cos(angle)), Q16::from_f64(libm::sin(angle)))
        })
        .unzip()
}

/// Writes transform output in the comparison format:
///
/// ```text
/// # 1024-point FFT Results (Q16.16 fixed-point)
/// # Format: Index, Real, Imag
/// # FFT Size: 1024
/// 0,12,-3
/// ...
/// ```
///
/// Bins are in natural order and values are the raw Q16.16 words.
pub fn write_results<W: Write>(mut writer: W, y_re: &[Fixed], y_im: &[Fixed]) -> io::Result<()> {
    if y_re.len() != y_im.len() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, FftError::SizeMismatch));
    }
    let n = y_re.len();

    writeln!(writer, "# {}-point FFT Results (Q16.16 fixed-point)", n)?;
    writeln!(writer, "# Format: Index, Real, Imag")?;
    writeln!(writer, "# FFT Size: {}", n)?;
    for (i, (re, im)) in y_re.iter().zip(y_im.iter()).enumerate() {
        writeln!(writer, "{},{},{}", i, re.to_bits(), im.to_bits())?;
    }
    writer.flush()
}

/// [`write_results`] into a new file at `path`.
pub fn save_results<P: AsRef<Path>>(path: P, y_re: &[Fixed], y_im: &[Fixed]) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_results(BufWriter::new(file), y_re, y_im)?;
    info!("results saved to '{}'", path.as_ref().display());
    Ok(())
}

fn invalid_data(line_no: usize, msg: impl fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", line_no, msg))
}

/// Parses the format produced by [`write_results`] back into raw words.
///
/// Lines starting with `#` and blank lines are skipped. Indices must count up from 0.
pub fn read_results<R: BufRead>(reader: R) -> io::Result<(Vec<i32>, Vec<i32>)> {
    let mut re = Vec::new();
    let mut im = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(invalid_data(line_no + 1, "expected 'index,real,imag'"));
        }
        let index: usize = fields[0].parse().map_err(|e| invalid_data(line_no + 1, e))?;
        if index != re.len() {
            return Err(invalid_data(
                line_no + 1,
                format_args!("expected index {}, found {}", re.len(), index),
            ));
        }
        re.push(fields[1].parse().map_err(|e| invalid_data(line_no + 1, e))?);
        im.push(fields[2].parse().map_err(|e| invalid_data(line_no + 1, e))?);
    }

    Ok((re, im))
}

/// Bin-by-bin difference between two result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub bins: usize,
    pub mismatches: usize,
    pub max_re_diff: u32,
    pub max_im_diff: u32,
    pub first_mismatch: Option<usize>,
}

impl Comparison {
    pub fn is_identical(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identical() {
            return write!(f, "all {} bins identical", self.bins);
        }
        write!(
            f,
            "{} of {} bins differ (max |dRe| = {}, max |dIm| = {}",
            self.mismatches, self.bins, self.max_re_diff, self.max_im_diff
        )?;
        if let Some(first) = self.first_mismatch {
            write!(f, ", first at bin {}", first)?;
        }
        write!(f, ")")
    }
}

/// Compares two `(real, imag)` result sets of raw words.
pub fn compare_results(
    expected: (&[i32], &[i32]),
    actual: (&[i32], &[i32]),
) -> Result<Comparison, FftError> {
    let n = expected.0.len();
    if expected.1.len() != n || actual.0.len() != n || actual.1.len() != n {
        return Err(FftError::SizeMismatch);
    }

    let mut cmp = Comparison {
        bins: n,
        mismatches: 0,
        max_re_diff: 0,
        max_im_diff: 0,
        first_mismatch: None,
    };

    for i in 0..n {
        let d_re = expected.0[i].abs_diff(actual.0[i]);
        let d_im = expected.1[i].abs_diff(actual.1[i]);
        if d_re != 0 || d_im != 0 {
            cmp.mismatches += 1;
            cmp.first_mismatch.get_or_insert(i);
        }
        cmp.max_re_diff = cmp.max_re_diff.max(d_re);
        cmp.max_im_diff = cmp.max_im_diff.max(d_im);
    }

    Ok(cmp)
}

/// Which half of the twiddle table an assembly data file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwiddlePart {
    Real,
    Imag,
}

impl TwiddlePart {
    pub fn label(self) -> &'static str {
        match self {
            TwiddlePart::Real => "twiddle_real",
            TwiddlePart::Imag => "twiddle_imag",
        }
    }

    fn description(self) -> &'static str {
        match self {
            TwiddlePart::Real => "real part",
            TwiddlePart::Imag => "imaginary part",
        }
    }
}

/// Emits one half of a twiddle table as a RISC-V assembly data section,
/// one `.word` per entry, so the assembly implementation runs on the same
/// coefficients as this crate.
pub fn write_twiddle_asm<W: Write>(
    mut writer: W,
    twiddles: &[ComplexFixed],
    part: TwiddlePart,
) -> io::Result<()> {
    let n = twiddles.len();

    writeln!(writer, "# Twiddle factor table ({}) for {}-point FFT", part.description(), n)?;
    writeln!(writer, "# Using Q16.16 fixed-point format")?;
    writeln!(writer, ".section .data")?;
    writeln!(writer, ".align 4")?;
    writeln!(writer, "{}:", part.label())?;
    for (k, w) in twiddles.iter().enumerate() {
        let value = match part {
            TwiddlePart::Real => w.re,
            TwiddlePart::Imag => w.im,
        };
        writeln!(
            writer,
            "    .word {:6}  # W_{}^{}: {:.6}",
            value.to_bits(),
            n,
            k,
            value.to_f64()
        )?;
    }
    writer.flush()
}

/// Decodes a little-endian `f32` dump of interleaved `(re, im)` pairs, as written
/// by the hardware simulator after the bit-reversal and final stages.
///
/// Trailing bytes that do not complete a pair are dropped with a warning.
pub fn read_f32_dump<R: Read>(mut reader: R) -> io::Result<Vec<Complex32>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() % 8 != 0 {
        warn!(
            "dump size ({} bytes) is not a whole number of complex f32 values; ignoring {} trailing bytes",
            bytes.len(),
            bytes.len() % 8
        );
    }

    Ok(bytes
        .chunks_exact(8)
        .map(|pair| {
            let re = f32::from_le_bytes([pair[0], pair[1], pair[2], pair[3]]);
            let im = f32::from_le_bytes([pair[4], pair[5], pair[6], pair[7]]);
            Complex32::new(re, im)
        })
        .collect())
}

/// Prints the first [`PREVIEW_BINS`] bins (inputs as reals, outputs both as reals
/// and as raw Q16.16 words) followed by the elapsed transform time.
pub fn write_report<W: Write>(
    mut writer: W,
    input: (&[Fixed], &[Fixed]),
    output: (&[Fixed], &[Fixed]),
    elapsed: Duration,
) -> io::Result<()> {
    let rows = PREVIEW_BINS
        .min(input.0.len())
        .min(input.1.len())
        .min(output.0.len())
        .min(output.1.len());

    writeln!(writer, "Fixed-Point FFT Results (first {} bins):", rows)?;
    writeln!(
        writer,
        "{:<5} | {:<10} | {:<10} | {:<29} | {:<32}",
        "Index", "Input Real", "Input Imag", "Fixed-Point FFT (Float)", "Fixed-Point FFT (Q16.16)"
    )?;
    writeln!(writer, "{}", "-".repeat(97))?;

    for i in 0..rows {
        let float_out = format!("{:<8.4} + {:<8.4}j", output.0[i].to_f64(), output.1[i].to_f64());
        let raw_out = format!("{:<10} + {:<10}j", output.0[i].to_bits(), output.1[i].to_bits());
        writeln!(
            writer,
            "{:<5} | {:<10.4} | {:<10.4} | {:<29} | {:<32}",
            i,
            input.0[i].to_f64(),
            input.1[i].to_f64(),
            float_out,
            raw_out
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Fixed-point FFT time: {:.6}s", elapsed.as_secs_f64())?;
    writer.flush()
}

/// Formats a single bin as `re + imj` with both float and raw values, for logs.
pub fn describe_bin(re: Fixed, im: Fixed) -> String {
    format!("{} + {}j (raw {} + {}j)", re, im, re.to_bits(), im.to_bits())
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
