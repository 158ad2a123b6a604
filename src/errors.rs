// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Errors which may occur during field arithmetic or scalar multiplication.

use core::fmt;
use core::fmt::Display;

/// Errors produced by the field capability or the ladder driver.
///
/// All of these are deterministic, local algebraic conditions: none is
/// retryable, and none is silently swallowed by the crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CurveError {
    /// A multiplicative inverse of the zero element was requested.
    InversionOfZero,
    /// The computation reached the point at infinity (the final
    /// projective Z coordinate was zero), so the affine x-coordinate of
    /// the result is undefined. This happens when the scalar is a
    /// multiple of the order of the input point.
    PointAtInfinity,
    /// The scalar exceeds the supported width of 256 bits.
    ScalarTooLarge {
        /// Bit length of the rejected scalar.
        bits: u64,
    },
    /// A decimal string could not be parsed as a non-negative integer.
    InvalidDecimal,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::InversionOfZero => write!(f, "cannot invert the zero field element"),
            CurveError::PointAtInfinity => {
                write!(f, "result is the point at infinity; affine x-coordinate undefined")
            }
            CurveError::ScalarTooLarge { bits } => {
                write!(f, "scalar is {} bits long; at most 256 bits are supported", bits)
            }
            CurveError::InvalidDecimal => {
                write!(f, "input is not a valid non-negative decimal integer")
            }
        }
    }
}

impl std::error::Error for CurveError {}
