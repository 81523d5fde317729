use super::*;
use super::super::types::{ComplexFixed, Q16};
use std::vec;
use std::vec::Vec;

type C = ComplexFixed;

#[test]
fn test_bit_reverse_8() {
    // Expected bit reversal for N=8:
    // 0 (000) -> 0 (000)
    // 1 (001) -> 4 (100)
    // 2 (010) -> 2 (010)
    // 3 (011) -> 6 (110)
    // 4 (100) -> 1 (001)
    // 5 (101) -> 5 (101)
    // 6 (110) -> 3 (011)
    // 7 (111) -> 7 (111)
    let table: Vec<usize> = (0..8).map(|i| bit_reverse(i, 3)).collect();
    assert_eq!(table, vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_bit_reverse_zero_bits() {
    assert_eq!(bit_reverse(0, 0), 0);
}

#[test]
fn test_bit_reverse_is_involution() {
    for bits in 1..=16 {
        for index in 0..(1usize << bits) {
            let once = bit_reverse(index, bits);
            assert!(once < (1 << bits));
            assert_eq!(bit_reverse(once, bits), index, "bits = {}, index = {}", bits, index);
        }
    }
}

#[test]
fn test_generate_twiddles_4() {
    let twiddles = generate_twiddles(4).unwrap();
    assert_eq!(twiddles.len(), 4);

    // k=0 -> angle=0     -> ( 1,  0)
    // k=1 -> angle=-pi/2 -> ( 0, -1)
    // k=2 -> angle=-pi   -> (-1,  0)
    // k=3 -> angle=-3pi/2-> ( 0,  1)
    // cos(-pi/2) is ~6e-17 and truncates to exactly 0
    assert_eq!(twiddles[0], C::from_bits(65536, 0));
    assert_eq!(twiddles[1], C::from_bits(0, -65536));
    assert_eq!(twiddles[2], C::from_bits(-65536, 0));
    assert_eq!(twiddles[3], C::from_bits(0, 65536));
}

#[test]
fn test_generate_twiddles_8_truncates() {
    let twiddles = generate_twiddles(8).unwrap();

    // cos(pi/4) * 65536 = 46340.95, truncated toward zero
    assert_eq!(twiddles[1], C::from_bits(46340, -46340));
    assert_eq!(twiddles[3], C::from_bits(-46340, -46340));
    assert_eq!(twiddles[5], C::from_bits(-46340, 46340));
    assert_eq!(twiddles[7], C::from_bits(46340, 46340));
}

#[test]
fn test_generate_twiddles_single_point() {
    assert_eq!(generate_twiddles(1).unwrap(), vec![C::from_bits(65536, 0)]);
}

#[test]
fn test_bit_reverse_permute() {
    let re: Vec<Q16> = (0..8).map(Q16::from_int).collect();
    let im = vec![Q16::zero(); 8];
    let mut output = vec![C::default(); 8];

    bit_reverse_permute(zip_parts(&re, &im), &mut output);

    let got: Vec<i32> = output.iter().map(|c| c.re.to_bits() >> 16).collect();
    assert_eq!(got, vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_fft_core_forward_impulse() {
    // Impulse at 0 -> DC out (flat)
    let n = 8;
    let mut buffer = vec![C::default(); n];
    buffer[0] = C::new(Q16::from_int(1), Q16::zero());

    let twiddles = generate_twiddles(n).unwrap();
    // Index 0 is its own bit reversal, so the buffer is already permuted
    radix_2_dit_fft_core(&mut buffer, &twiddles);

    for (i, val) in buffer.iter().enumerate() {
        assert_eq!(val.re, Q16::from_int(1), "Real part at index {}", i);
        assert_eq!(val.im, Q16::zero(), "Imaginary part at index {}", i);
    }
}

#[test]
fn test_fft_core_dc_is_exact() {
    // Flat input only ever meets twiddle 0 on its way to bin 0
    let n = 8;
    let mut buffer = vec![C::new(Q16::from_int(1), Q16::zero()); n];
    let twiddles = generate_twiddles(n).unwrap();

    radix_2_dit_fft_core(&mut buffer, &twiddles);

    assert_eq!(buffer[0], C::new(Q16::from_int(8), Q16::zero()));
    for val in &buffer[1..] {
        assert_eq!(*val, C::default());
    }
}

#[test]
fn test_fft_core_single_point_is_identity() {
    let mut buffer = vec![C::from_bits(123, -456)];
    let twiddles = generate_twiddles(1).unwrap();

    radix_2_dit_fft_core(&mut buffer, &twiddles);

    assert_eq!(buffer, vec![C::from_bits(123, -456)]);
}
