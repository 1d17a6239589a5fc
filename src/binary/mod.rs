//! Binary logic primitives.
//!
//! This module provides the core types for simulating combinational
//! binary logic:
//! - [`Bit`] - A single binary digit (0 or 1)
//! - [`Byte`] - An 8-bit word (index 0 = most significant bit)
//! - [`BitRepr`] - The three interchangeable bit representations
//! - [`Gate`] - The XOR/AND/OR gate layer
//! - [`adder`] - Half adder, full adder, and the 8-bit ripple-carry adder

mod bit;
mod byte;
mod gate;
mod repr;
pub mod adder;

pub use adder::{add8_bit, add8_str, add_bytes, full_adder, half_adder};
pub use bit::{Bit, BitError};
pub use byte::{Byte, ParseError};
pub use gate::{and, or, xor, Gate};
pub use repr::BitRepr;
