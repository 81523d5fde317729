// src/fixed/types/fixed.rs
/// Generic fixed-point structure based on the number of fractional bits (FRAC).
/// The internal value is stored as a signed 32-bit integer.
///
/// `Fixed` with no parameter is the Q16.16 format used by the FFT.
/// All arithmetic wraps on overflow, exactly like two's-complement hardware.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32 = 16>(i32);

/// Q16.16: 16 integer bits (including sign) and 16 fractional bits.
pub type Q16 = Fixed<16>;

impl<const FRAC: u32> Fixed<FRAC> {
    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Creates a Fixed from an integer, applying the necessary shift.
    /// E.g.: Fixed::<8>::from_int(1) will result in internal value 256.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value.wrapping_shl(FRAC))
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Converts an f64 to Fixed, truncating toward zero.
    ///
    /// There is no range check: the scaled value goes through a 64-bit integer
    /// and its low 32 bits are kept, so out-of-range inputs wrap. NaN becomes zero.
    pub fn from_f64(value: f64) -> Self {
        let scaling_factor = (1u64 << FRAC) as f64;
        let bits = (value * scaling_factor) as i64;
        Self::from_bits(bits as i32)
    }

    /// Converts back to f64. Exact, since every i32 is representable.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << FRAC) as f64
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.0
    }
}

/// Converts a real number to raw Q16.16 bits, truncating toward zero.
#[inline]
pub fn to_fixed(value: f64) -> i32 {
    Q16::from_f64(value).to_bits()
}

/// Converts raw Q16.16 bits to a real number.
#[inline]
pub fn from_fixed(value: i32) -> f64 {
    Q16::from_bits(value).to_f64()
}

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl<const FRAC: u32> Mul for Fixed<FRAC> {
    type Output = Self;

    /// Full 64-bit product, then an arithmetic shift right by FRAC.
    /// The shift floors (rounds toward negative infinity); the result wraps to 32 bits.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let product = self.0 as i64 * rhs.0 as i64;
        Self((product >> FRAC) as i32)
    }
}

impl<const FRAC: u32> MulAssign for Fixed<FRAC> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

use core::fmt;

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
