//! Bit representation trait.
//!
//! The simulator accepts a single bit in three interchangeable forms:
//! native booleans, 0/1 integers, and '0'/'1' characters. [`BitRepr`] is
//! the seam between those forms and the canonical [`Bit`]: every gate is
//! generic over one `B: BitRepr`, so both operands (and the result) share
//! one representation by construction. Mixing representations in a single
//! call is a type error, not a runtime condition.

use crate::binary::bit::{Bit, BitError};

/// Trait for the single-bit representations the gate layer accepts.
///
/// Implemented for `bool`, `u8` (digits 0/1), `char` (digits '0'/'1'),
/// and [`Bit`] itself.
pub trait BitRepr: Copy {
    /// Validate and normalize to the canonical [`Bit`].
    ///
    /// Fails fast on a value outside the digit set, before any gate
    /// logic runs.
    fn into_bit(self) -> Result<Bit, BitError>;

    /// Map a canonical [`Bit`] back into this representation.
    fn from_bit(bit: Bit) -> Self;
}

impl BitRepr for Bit {
    #[inline]
    fn into_bit(self) -> Result<Bit, BitError> {
        Ok(self)
    }

    #[inline]
    fn from_bit(bit: Bit) -> Self {
        bit
    }
}

impl BitRepr for bool {
    #[inline]
    fn into_bit(self) -> Result<Bit, BitError> {
        Ok(Bit::from_bool(self))
    }

    #[inline]
    fn from_bit(bit: Bit) -> Self {
        bit.to_bool()
    }
}

impl BitRepr for u8 {
    #[inline]
    fn into_bit(self) -> Result<Bit, BitError> {
        Bit::from_u8(self)
    }

    #[inline]
    fn from_bit(bit: Bit) -> Self {
        bit.to_u8()
    }
}

impl BitRepr for char {
    #[inline]
    fn into_bit(self) -> Result<Bit, BitError> {
        Bit::from_char(self)
    }

    #[inline]
    fn from_bit(bit: Bit) -> Self {
        bit.to_char()
    }
}
