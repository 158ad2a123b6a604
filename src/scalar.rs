// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Arbitrary-precision scalars for the Montgomery ladder.
//!
//! A [`Scalar`] is a raw non-negative integer of at most 256 bits. It is
//! deliberately *not* reduced modulo the group order and *not* clamped:
//! the ladder multiplies by exactly the integer it is given, matching
//! the decimal command-line interface this crate exposes.

use core::fmt;
use core::fmt::Display;

use num_bigint::BigUint;
use num_traits::Zero;
use subtle::Choice;

use crate::errors::CurveError;

/// Width cap on scalars, in bits.
pub const MAX_SCALAR_BITS: u64 = 256;

/// A non-negative multiplier of at most 256 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scalar(BigUint);

impl Scalar {
    /// Parse a decimal string.
    ///
    /// # Errors
    ///
    /// [`CurveError::InvalidDecimal`] on malformed input and
    /// [`CurveError::ScalarTooLarge`] beyond 256 bits.
    pub fn from_decimal(s: &str) -> Result<Scalar, CurveError> {
        let n = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(CurveError::InvalidDecimal)?;
        Scalar::try_from_biguint(n)
    }

    /// Construct from an integer, enforcing the 256-bit cap.
    pub fn try_from_biguint(n: BigUint) -> Result<Scalar, CurveError> {
        if n.bits() > MAX_SCALAR_BITS {
            return Err(CurveError::ScalarTooLarge { bits: n.bits() });
        }
        Ok(Scalar(n))
    }

    /// The canonical decimal representation.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Whether this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The bit length: one past the position of the most significant set
    /// bit, or zero for the zero scalar.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// The bit at position `i` (little-endian indexing), as a `Choice`
    /// ready for the ladder's conditional swap.
    pub fn bit(&self, i: u64) -> Choice {
        Choice::from(self.0.bit(i) as u8)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Scalar {
        Scalar(BigUint::from(n))
    }
}

/// Small-value comparisons, used by the ladder's degenerate-scalar paths.
impl PartialEq<u64> for Scalar {
    fn eq(&self, other: &u64) -> bool {
        self.0 == BigUint::from(*other)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decimal_roundtrip() {
        let s = Scalar::from_decimal("21348576").unwrap();
        assert_eq!(s.to_decimal(), "21348576");
        assert_eq!(s, 21348576u64);
    }

    #[test]
    fn bits_and_bit_positions() {
        let s = Scalar::from(25u64); // 0b11001
        assert_eq!(s.bits(), 5);
        let expected = [true, false, false, true, true];
        for (i, &bit) in expected.iter().enumerate() {
            assert_eq!(bool::from(s.bit(i as u64)), bit);
        }
        assert!(!bool::from(s.bit(5)));
    }

    #[test]
    fn zero_scalar() {
        let s = Scalar::from_decimal("0").unwrap();
        assert!(s.is_zero());
        assert_eq!(s.bits(), 0);
    }

    #[test]
    fn cap_at_256_bits() {
        // 2^256 - 1 is accepted, 2^256 is not.
        let max = (BigUint::from(1u32) << 256u32) - BigUint::from(1u32);
        assert!(Scalar::try_from_biguint(max).is_ok());
        let over = BigUint::from(1u32) << 256u32;
        assert_eq!(
            Scalar::try_from_biguint(over),
            Err(CurveError::ScalarTooLarge { bits: 257 }),
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Scalar::from_decimal("ten"), Err(CurveError::InvalidDecimal));
        assert_eq!(Scalar::from_decimal(""), Err(CurveError::InvalidDecimal));
    }
}
