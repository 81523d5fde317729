use super::fixed::Fixed;
use num_complex::Complex64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexFixed<const FRAC: u32 = 16> {
    pub re: Fixed<FRAC>,
    pub im: Fixed<FRAC>,
}

impl<const FRAC: u32> ComplexFixed<FRAC> {
    pub const fn new(re: Fixed<FRAC>, im: Fixed<FRAC>) -> Self {
        Self { re, im }
    }

    /// Builds a value from raw (real, imaginary) words.
    #[inline]
    pub const fn from_bits(re: i32, im: i32) -> Self {
        Self::new(Fixed::from_bits(re), Fixed::from_bits(im))
    }

    #[inline]
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(Fixed::from_f64(re), Fixed::from_f64(im))
    }

    /// Returns the complex conjugate (a - bi)
    #[inline]
    pub fn conj(self) -> Self {
        ComplexFixed {
            re: self.re,
            im: -self.im,
        }
    }

    /// Converts both parts to f64.
    #[inline]
    pub fn to_complex64(self) -> Complex64 {
        Complex64::new(self.re.to_f64(), self.im.to_f64())
    }
}

impl<const FRAC: u32> From<ComplexFixed<FRAC>> for Complex64 {
    fn from(value: ComplexFixed<FRAC>) -> Self {
        value.to_complex64()
    }
}

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

impl<const FRAC: u32> Add for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ComplexFixed {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<const FRAC: u32> AddAssign for ComplexFixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<const FRAC: u32> Sub for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ComplexFixed {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<const FRAC: u32> SubAssign for ComplexFixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<const FRAC: u32> Mul for ComplexFixed<FRAC> {
    type Output = Self;

    /// Each of the four partial products is scaled on its own before the
    /// wrapping add/sub, so the result matches a 32-bit integer datapath bit for bit.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // (ac - bd)
        let re = (self.re * rhs.re) - (self.im * rhs.im);
        // (ad + bc)
        let im = (self.re * rhs.im) + (self.im * rhs.re);

        ComplexFixed { re, im }
    }
}
