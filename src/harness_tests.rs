use super::*;
use crate::fixed::{generate_twiddles, transform, to_fixed};
use std::string::{String, ToString};
use std::vec;

fn fixed_vec(raw: &[i32]) -> Vec<Fixed> {
    raw.iter().map(|&v| Q16::from_bits(v)).collect()
}

#[test]
fn test_complex_tone_samples() {
    let (re, im) = complex_tone(8, 1);

    assert_eq!(re[0].to_bits(), 65536);
    assert_eq!(im[0].to_bits(), 0);
    assert_eq!(re[1].to_bits(), to_fixed(libm::cos(PI / 4.0)));
    assert_eq!(im[1].to_bits(), 46340);
    // sin(pi) is ~1.2e-16 and truncates to 0
    assert_eq!(re[4].to_bits(), -65536);
    assert_eq!(im[4].to_bits(), 0);
}

#[test]
fn test_write_results_format() {
    let mut out = Vec::new();
    write_results(&mut out, &fixed_vec(&[1, -2]), &fixed_vec(&[3, 65536])).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "# 2-point FFT Results (Q16.16 fixed-point)\n\
         # Format: Index, Real, Imag\n\
         # FFT Size: 2\n\
         0,1,3\n\
         1,-2,65536\n"
    );
}

#[test]
fn test_write_results_rejects_uneven_parts() {
    let err = write_results(Vec::new(), &fixed_vec(&[1, 2]), &fixed_vec(&[1])).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn test_results_file_reads_back() {
    let (re, im) = complex_tone(64, 9);
    let (y_re, y_im) = transform(&re, &im, 64).unwrap();

    let mut out = Vec::new();
    write_results(&mut out, &y_re, &y_im).unwrap();
    let (r_re, r_im) = read_results(&out[..]).unwrap();

    assert_eq!(r_re, y_re.iter().map(|v| v.to_bits()).collect::<Vec<_>>());
    assert_eq!(r_im, y_im.iter().map(|v| v.to_bits()).collect::<Vec<_>>());
}

#[test]
fn test_read_results_tolerates_spaces_and_blank_lines() {
    let text = "# header\n\n0, 5, -6\n1,7,8\n";
    let (re, im) = read_results(text.as_bytes()).unwrap();
    assert_eq!(re, vec![5, 7]);
    assert_eq!(im, vec![-6, 8]);
}

#[test]
fn test_read_results_rejects_malformed_lines() {
    for text in ["0,1\n", "0,1,x\n", "1,0,0\n", "0,0,0\n0,0,0\n"] {
        let err = read_results(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData, "input {:?}", text);
    }
}

#[test]
fn test_compare_results() {
    let a_re = [1, 2, 3, 4];
    let a_im = [0, 0, 0, 0];
    let b_re = [1, 2, 5, 4];
    let b_im = [0, -1, 0, 0];

    let same = compare_results((&a_re, &a_im), (&a_re, &a_im)).unwrap();
    assert!(same.is_identical());
    assert_eq!(same.to_string(), "all 4 bins identical");

    let diff = compare_results((&a_re, &a_im), (&b_re, &b_im)).unwrap();
    assert_eq!(
        diff,
        Comparison {
            bins: 4,
            mismatches: 2,
            max_re_diff: 2,
            max_im_diff: 1,
            first_mismatch: Some(1),
        }
    );
    assert_eq!(
        diff.to_string(),
        "2 of 4 bins differ (max |dRe| = 2, max |dIm| = 1, first at bin 1)"
    );

    assert_eq!(
        compare_results((&a_re, &a_im), (&b_re[..2], &b_im[..2])),
        Err(FftError::SizeMismatch)
    );
}

#[test]
fn test_compare_extreme_values() {
    let diff = compare_results((&[i32::MIN], &[0]), (&[i32::MAX], &[0])).unwrap();
    assert_eq!(diff.max_re_diff, u32::MAX);
}

#[test]
fn test_write_twiddle_asm() {
    let twiddles = generate_twiddles(4).unwrap();

    let mut out = Vec::new();
    write_twiddle_asm(&mut out, &twiddles, TwiddlePart::Imag).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "# Twiddle factor table (imaginary part) for 4-point FFT");
    assert_eq!(lines[4], "twiddle_imag:");
    assert_eq!(lines[5], "    .word      0  # W_4^0: 0.000000");
    assert_eq!(lines[6], "    .word -65536  # W_4^1: -1.000000");
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_read_f32_dump() {
    let mut bytes = Vec::new();
    for v in [1.5f32, -2.0, 0.25, 8.0] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    // A dangling real part without its imaginary half
    bytes.extend_from_slice(&3.0f32.to_le_bytes());

    let values = read_f32_dump(&bytes[..]).unwrap();
    assert_eq!(values, vec![Complex32::new(1.5, -2.0), Complex32::new(0.25, 8.0)]);
}

#[test]
fn test_write_report() {
    let (re, im) = complex_tone(16, 1);
    let (y_re, y_im) = transform(&re, &im, 16).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, (&re, &im), (&y_re, &y_im), Duration::from_micros(1500)).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Fixed-Point FFT Results (first 8 bins):");
    assert!(lines[1].starts_with("Index | Input Real"));
    // header, column names, rule, 8 rows, blank line, timing
    assert_eq!(lines.len(), 13);
    assert!(lines[3].starts_with("0     | 1.0000     | 0.0000     |"));
    assert_eq!(lines[12], "Fixed-point FFT time: 0.001500s");
}

#[test]
fn test_write_report_short_input() {
    let one = fixed_vec(&[65536]);
    let zero = fixed_vec(&[0]);

    let mut out = Vec::new();
    write_report(&mut out, (&one, &zero), (&one, &zero), Duration::ZERO).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Fixed-Point FFT Results (first 1 bins):"));
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_describe_bin() {
    assert_eq!(
        describe_bin(Q16::from_bits(65536), Q16::from_bits(-32768)),
        "1.000000 + -0.500000j (raw 65536 + -32768j)"
    );
}
