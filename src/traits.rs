// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Module for common traits.
//!
//! [`FieldElement`] is the boundary between the ladder and the field
//! arithmetic it consumes: the ladder never inspects an element's
//! representation, it only invokes these operations. [`MontgomeryCurve`]
//! ties a field to the one curve constant the doubling formula needs, so
//! the same ladder code serves any Montgomery curve over any backend.

use core::fmt::Debug;

use subtle::Choice;

use crate::errors::CurveError;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// An element of a prime field, as consumed by the Montgomery ladder.
///
/// Implementations own their representation entirely; the ladder code
/// only ever calls these methods. Arithmetic methods take `&self` and
/// return fresh elements, mirroring how the scratch values in each
/// ladder step are scoped to that step.
pub trait FieldElement: Clone + PartialEq + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// The element congruent to the given small integer.
    fn from_u64(n: u64) -> Self;

    /// Parse a decimal string, reducing modulo the field prime.
    fn from_decimal(s: &str) -> Result<Self, CurveError>;

    /// The canonical decimal representation, in `[0, p)`.
    fn to_decimal(&self) -> String;

    /// Test whether this is the zero element.
    fn is_zero(&self) -> bool;

    /// Field addition.
    fn add(&self, rhs: &Self) -> Self;

    /// Field subtraction.
    fn sub(&self, rhs: &Self) -> Self;

    /// Field multiplication.
    fn mul(&self, rhs: &Self) -> Self;

    /// Field squaring.
    fn square(&self) -> Self;

    /// Multiplication by a small integer constant.
    fn mul_small(&self, k: u64) -> Self;

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`CurveError::InversionOfZero`] if `self` is zero. Implementations
    /// must surface this explicitly rather than produce an unspecified
    /// value.
    fn invert(&self) -> Result<Self, CurveError>;

    /// Swap `a` and `b` if `choice` is set.
    ///
    /// The ladder routes the secret scalar bit exclusively through this
    /// operation, so an implementation intended for secret scalars must
    /// run in time independent of `choice`.
    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice);
}

/// A Montgomery curve \\(B v^2 = u^3 + A u^2 + u\\) over a prime field.
///
/// Only the constant \\((A + 2) / 4\\) enters the x-only formulas, so
/// that is all a curve needs to declare.
pub trait MontgomeryCurve {
    /// The field the curve is defined over.
    type F: FieldElement;

    /// The curve constant \\((A + 2) / 4\\).
    const APLUS2_OVER_FOUR: u64;
}

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}
