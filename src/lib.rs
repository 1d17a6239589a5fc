//! # ripple8
//!
//! A gate-level combinational logic simulator of an 8-bit ripple-carry adder.
//!
//! XOR, AND, and OR gates compose into half adders, full adders, and an
//! 8-bit ripple-carry adder, all polymorphic over three interchangeable
//! bit representations: native booleans, 0/1 integers, and '0'/'1'
//! characters. The representation is a type parameter, so mixing two
//! representations in one operation does not compile.

pub mod binary;

// Re-export commonly used types and operations
pub use binary::{
    add8_bit, add8_str, add_bytes, and, full_adder, half_adder, or, xor, Bit, BitError, BitRepr,
    Byte, Gate, ParseError,
};
