//! Simulated logic gates.
//!
//! The three gates of the adder circuit, generic over any bit
//! representation. Each gate normalizes its operands through [`Bit`],
//! applies the truth table there, and maps the result back out, so the
//! result representation always matches the inputs.

use crate::binary::bit::{Bit, BitError};
use crate::binary::repr::BitRepr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive or of two bits of the same representation.
#[inline]
pub fn xor<B: BitRepr>(a: B, b: B) -> Result<B, BitError> {
    Ok(B::from_bit(a.into_bit()?.xor(b.into_bit()?)))
}

/// Conjunction of two bits of the same representation.
#[inline]
pub fn and<B: BitRepr>(a: B, b: B) -> Result<B, BitError> {
    Ok(B::from_bit(a.into_bit()?.and(b.into_bit()?)))
}

/// Disjunction of two bits of the same representation.
#[inline]
pub fn or<B: BitRepr>(a: B, b: B) -> Result<B, BitError> {
    Ok(B::from_bit(a.into_bit()?.or(b.into_bit()?)))
}

/// A two-input combinational gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    Xor,
    And,
    Or,
}

impl Gate {
    /// All gate kinds in order: Xor, And, Or
    pub const ALL: [Gate; 3] = [Gate::Xor, Gate::And, Gate::Or];

    /// Apply the gate to two canonical bits.
    #[inline]
    pub const fn apply(self, a: Bit, b: Bit) -> Bit {
        match self {
            Gate::Xor => a.xor(b),
            Gate::And => a.and(b),
            Gate::Or => a.or(b),
        }
    }

    /// Apply the gate to two bits of any one representation.
    pub fn eval<B: BitRepr>(self, a: B, b: B) -> Result<B, BitError> {
        Ok(B::from_bit(self.apply(a.into_bit()?, b.into_bit()?)))
    }

    /// The four-row truth table as (a, b, output), inputs in
    /// (0,0), (0,1), (1,0), (1,1) order.
    pub fn truth_table(self) -> [(Bit, Bit, Bit); 4] {
        let mut rows = [(Bit::O, Bit::O, Bit::O); 4];
        let mut i = 0;
        for a in Bit::ALL {
            for b in Bit::ALL {
                rows[i] = (a, b, self.apply(a, b));
                i += 1;
            }
        }
        rows
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Xor => write!(f, "XOR"),
            Gate::And => write!(f, "AND"),
            Gate::Or => write!(f, "OR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_all_representations() {
        assert_eq!(xor(false, true), Ok(true));
        assert_eq!(xor(true, true), Ok(false));
        assert_eq!(xor(0u8, 1), Ok(1));
        assert_eq!(xor(1u8, 1), Ok(0));
        assert_eq!(xor('0', '1'), Ok('1'));
        assert_eq!(xor('1', '1'), Ok('0'));
    }

    #[test]
    fn test_and_all_representations() {
        assert_eq!(and(true, true), Ok(true));
        assert_eq!(and(true, false), Ok(false));
        assert_eq!(and(1u8, 1), Ok(1));
        assert_eq!(and(0u8, 1), Ok(0));
        assert_eq!(and('1', '1'), Ok('1'));
        assert_eq!(and('1', '0'), Ok('0'));
    }

    #[test]
    fn test_or_all_representations() {
        assert_eq!(or(false, false), Ok(false));
        assert_eq!(or(false, true), Ok(true));
        assert_eq!(or(0u8, 0), Ok(0));
        assert_eq!(or(1u8, 0), Ok(1));
        assert_eq!(or('0', '0'), Ok('0'));
        assert_eq!(or('0', '1'), Ok('1'));
    }

    #[test]
    fn test_gate_commutativity() {
        for gate in Gate::ALL {
            for a in [0u8, 1] {
                for b in [0u8, 1] {
                    assert_eq!(gate.eval(a, b), gate.eval(b, a));
                }
            }
        }
    }

    #[test]
    fn test_malformed_operands_fail() {
        assert_eq!(xor(2u8, 1), Err(BitError::InvalidDigit(2)));
        assert_eq!(and(1u8, 3), Err(BitError::InvalidDigit(3)));
        assert_eq!(or('x', '1'), Err(BitError::InvalidChar('x')));
    }

    #[test]
    fn test_eval_matches_free_functions() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                assert_eq!(Gate::Xor.eval(a, b), xor(a, b));
                assert_eq!(Gate::And.eval(a, b), and(a, b));
                assert_eq!(Gate::Or.eval(a, b), or(a, b));
            }
        }
    }

    #[test]
    fn test_truth_table_rows() {
        let rows = Gate::And.truth_table();
        assert_eq!(rows[0], (Bit::O, Bit::O, Bit::O));
        assert_eq!(rows[3], (Bit::I, Bit::I, Bit::I));

        let rows = Gate::Or.truth_table();
        assert_eq!(rows[0], (Bit::O, Bit::O, Bit::O));
        assert_eq!(rows[1], (Bit::O, Bit::I, Bit::I));
    }
}
