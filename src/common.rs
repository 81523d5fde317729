// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    BufferTooSmall,
    AllocationFailure,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::BufferTooSmall => write!(f, "Twiddle table is too small for the FFT size"),
            FftError::AllocationFailure => write!(f, "Memory allocation failed for FFT buffers"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Reserves an empty vector able to hold exactly `n` elements without reallocating.
///
/// Allocation failure is reported instead of aborting the process.
pub(crate) fn try_alloc<T>(n: usize) -> Result<alloc::vec::Vec<T>, FftError> {
    let mut buffer = alloc::vec::Vec::new();
    buffer
        .try_reserve_exact(n)
        .map_err(|_| FftError::AllocationFailure)?;
    Ok(buffer)
}
