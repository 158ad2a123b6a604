// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Scalar multiplication on the Montgomery form of Curve25519.
//!
//! Montgomery arithmetic works not on the curve itself but on the
//! x-line, which discards sign information and unifies the curve and
//! its quadratic twist. A point is tracked as a projective pair
//! \\((X : Z)\\) with affine \\(x = X / Z\\); \\(Z = 0\\) denotes the
//! point at infinity. The ladder maintains two such pairs whose
//! difference is always the fixed base point, which is what lets the
//! differential-addition formula use the base point's affine
//! x-coordinate as its normaliser.
//!
//! # Scalars are raw integers
//!
//! [`MontgomeryPoint::mul`] multiplies by the scalar exactly as given,
//! with no RFC 7748 clamping and no reduction modulo the group order.
//! A scalar that is a multiple of the input point's order therefore
//! drives the ladder into the point at infinity, which surfaces as
//! [`CurveError::PointAtInfinity`] rather than a fabricated coordinate.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.
#![allow(non_snake_case)]

use core::fmt;
use core::fmt::Debug;

use subtle::Choice;

use crate::constants::APLUS2_OVER_FOUR;
use crate::errors::CurveError;
use crate::field::Fp25519;
use crate::scalar::Scalar;
use crate::traits::{FieldElement, Identity, MontgomeryCurve};

/// The Montgomery form of Curve25519,
/// \\(v^2 = u^3 + 486662 u^2 + u\\) over \\(\mathbb F\_{2^{255} - 19}\\),
/// instantiated over the [`Fp25519`] backend.
#[derive(Clone, Copy, Debug)]
pub struct Curve25519;

impl MontgomeryCurve for Curve25519 {
    type F = Fp25519;
    const APLUS2_OVER_FOUR: u64 = APLUS2_OVER_FOUR;
}

/// A point on Curve25519, held as its affine x-coordinate.
pub type Curve25519Point = MontgomeryPoint<Curve25519>;

/// Holds the affine x-coordinate of a point on a Montgomery curve or
/// its twist.
///
/// The x-coordinate does not distinguish a point from its negative, and
/// it does not certify that a point lies on the curve rather than the
/// twist: an off-curve x runs the ladder on the twist and yields the
/// twist multiple. Nothing here validates curve membership.
pub struct MontgomeryPoint<C: MontgomeryCurve>(pub C::F);

impl<C: MontgomeryCurve> Clone for MontgomeryPoint<C> {
    fn clone(&self) -> MontgomeryPoint<C> {
        MontgomeryPoint(self.0.clone())
    }
}

impl<C: MontgomeryCurve> Debug for MontgomeryPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MontgomeryPoint").field(&self.0).finish()
    }
}

impl<C: MontgomeryCurve> PartialEq for MontgomeryPoint<C> {
    fn eq(&self, other: &MontgomeryPoint<C>) -> bool {
        self.0 == other.0
    }
}

impl<C: MontgomeryCurve> Eq for MontgomeryPoint<C> {}

impl<C: MontgomeryCurve> Identity for MontgomeryPoint<C> {
    /// Return the group identity element.
    ///
    /// The identity has no affine x-coordinate; by the usual x-line
    /// convention it is represented as 0. Note that 0 is also the
    /// x-coordinate of the genuine two-torsion point \\((0, 0)\\).
    fn identity() -> MontgomeryPoint<C> {
        MontgomeryPoint(C::F::zero())
    }
}

impl<C: MontgomeryCurve> MontgomeryPoint<C> {
    /// Parse a point from the decimal representation of its affine
    /// x-coordinate, reduced modulo the field prime.
    pub fn from_decimal(s: &str) -> Result<MontgomeryPoint<C>, CurveError> {
        Ok(MontgomeryPoint(C::F::from_decimal(s)?))
    }

    /// The decimal representation of the affine x-coordinate.
    pub fn to_decimal(&self) -> String {
        self.0.to_decimal()
    }

    /// Double this point: one projective doubling followed by the
    /// conversion back to affine.
    ///
    /// # Errors
    ///
    /// [`CurveError::PointAtInfinity`] if the double is the identity,
    /// i.e. `self` is a two-torsion point.
    pub fn double(&self) -> Result<MontgomeryPoint<C>, CurveError> {
        ProjectivePoint::from_affine(&self.0).double().as_affine()
    }

    /// Multiply this point by a [`Scalar`], returning the affine
    /// x-coordinate of the multiple.
    ///
    /// This is the Montgomery ladder: after handling scalars of bit
    /// length ≤ 2 directly, it walks the remaining bits from the most
    /// significant downward, maintaining two projective points that
    /// always differ by `self` and advancing both with one combined
    /// differential-add-and-double per bit. The scalar bit selects
    /// which point plays which role purely through a conditional swap.
    /// One field inversion at the end converts back to affine.
    ///
    /// Multiplying by zero returns [`Identity::identity`].
    ///
    /// # Errors
    ///
    /// [`CurveError::PointAtInfinity`] if the multiple is the point at
    /// infinity (the scalar is a nonzero multiple of the point's
    /// order), which has no affine x-coordinate.
    pub fn mul(&self, scalar: &Scalar) -> Result<MontgomeryPoint<C>, CurveError> {
        // [0]P = O. A defined result, not an abort: the identity is
        // representable, so a degenerate scalar is not an error.
        if scalar.is_zero() {
            return Ok(MontgomeryPoint::identity());
        }
        // [1]P = P; a copy, no arithmetic.
        if *scalar == 1u64 {
            return Ok(self.clone());
        }

        let affine_x = &self.0;
        let mut Pm = ProjectivePoint::from_affine(affine_x);
        let mut Pp = Pm.double();

        if *scalar == 2u64 {
            return Pp.as_affine();
        }

        // (Pm, Pp) = ([1]P, [2]P) matches the most significant set bit
        // already being processed; scan the remaining bits downward.
        // Invariant: entering an iteration with k the value of the bits
        // processed so far, Pm = [k]P and Pp = [k+1]P.
        let l = scalar.bits();
        for i in (0..=l - 2).rev() {
            let bit = scalar.bit(i);
            ProjectivePoint::conditional_swap(&mut Pm, &mut Pp, bit);
            differential_add_and_double(&mut Pm, &mut Pp, affine_x);
            ProjectivePoint::conditional_swap(&mut Pm, &mut Pp, bit);
        }

        Pm.as_affine()
    }
}

/// A `ProjectivePoint` holds a point on the projective line
/// \\(\mathbb P(\mathbb F\_p)\\), which we identify with the Kummer
/// line of the Montgomery curve.
pub(crate) struct ProjectivePoint<C: MontgomeryCurve> {
    pub X: C::F,
    pub Z: C::F,
}

impl<C: MontgomeryCurve> Clone for ProjectivePoint<C> {
    fn clone(&self) -> ProjectivePoint<C> {
        ProjectivePoint {
            X: self.X.clone(),
            Z: self.Z.clone(),
        }
    }
}

impl<C: MontgomeryCurve> Debug for ProjectivePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectivePoint")
            .field("X", &self.X)
            .field("Z", &self.Z)
            .finish()
    }
}

impl<C: MontgomeryCurve> ProjectivePoint<C> {
    /// Lift an affine x-coordinate to the trivial projective
    /// representative \\((x : 1)\\).
    pub fn from_affine(x: &C::F) -> ProjectivePoint<C> {
        ProjectivePoint {
            X: x.clone(),
            Z: C::F::one(),
        }
    }

    /// Compute \\(\[2\]P\\) in projective coordinates.
    ///
    /// With \\(A = X + Z\\), \\(B = X - Z\\), \\(E = A^2 - B^2\\):
    /// $$
    ///     X' = A^2 B^2, \qquad Z' = E (B^2 + \tfrac{A+2}{4} E).
    /// $$
    /// Total cost is two squarings, two multiplications, and one
    /// multiplication by the small curve constant. Defined for every
    /// input: the point at infinity \\((X : 0)\\) doubles to itself up
    /// to representation.
    pub fn double(&self) -> ProjectivePoint<C> {
        let b = self.X.sub(&self.Z);
        let a = self.X.add(&self.Z);
        let bb = b.square();
        let aa = a.square();
        let e = aa.sub(&bb); // = 4 X Z
        ProjectivePoint {
            X: bb.mul(&aa),
            Z: e.mul_small(C::APLUS2_OVER_FOUR).add(&bb).mul(&e),
        }
    }

    /// Swap the two points if `choice` is set, field element by field
    /// element through the backend's [`FieldElement::conditional_swap`].
    pub fn conditional_swap(a: &mut ProjectivePoint<C>, b: &mut ProjectivePoint<C>, choice: Choice) {
        C::F::conditional_swap(&mut a.X, &mut b.X, choice);
        C::F::conditional_swap(&mut a.Z, &mut b.Z, choice);
    }

    /// Dehomogenize this point to its affine x-coordinate \\(X / Z\\).
    ///
    /// # Errors
    ///
    /// [`CurveError::PointAtInfinity`] if \\(Z = 0\\).
    pub fn as_affine(&self) -> Result<MontgomeryPoint<C>, CurveError> {
        if self.Z.is_zero() {
            return Err(CurveError::PointAtInfinity);
        }
        Ok(MontgomeryPoint(self.X.mul(&self.Z.invert()?)))
    }
}

/// Perform the combined step of the Montgomery ladder.
///
/// Given projective points \\(P\_m = (X\_m : Z\_m)\\) and
/// \\(P\_p = (X\_p : Z\_p)\\) whose difference has affine x-coordinate
/// `affine_x` (with implicit \\(z = 1\\)), set
/// $$
///     P\_p \gets P\_m + P\_p, \qquad P\_m \gets \[2\] P\_m.
/// $$
/// The differential addition is
/// $$
///     X\_p' = \bigl((X\_m + Z\_m)(X\_p - Z\_p) + (X\_m - Z\_m)(X\_p + Z\_p)\bigr)^2,
/// $$
/// $$
///     Z\_p' = x \cdot \bigl((X\_m + Z\_m)(X\_p - Z\_p) - (X\_m - Z\_m)(X\_p + Z\_p)\bigr)^2,
/// $$
/// valid only because the difference of the two points is the fixed
/// base point; the doubling of \\(P\_m\\) reuses the sums and
/// differences already formed. Every call performs the same field
/// operations in the same order regardless of the scalar bit, which
/// enters only through the surrounding conditional swaps.
fn differential_add_and_double<C: MontgomeryCurve>(
    Pm: &mut ProjectivePoint<C>,
    Pp: &mut ProjectivePoint<C>,
    affine_x: &C::F,
) {
    let t1 = Pm.X.sub(&Pm.Z); // X_m - Z_m
    let t2 = Pm.X.add(&Pm.Z); // X_m + Z_m
    let t3 = Pp.X.sub(&Pp.Z); // X_p - Z_p
    let t4 = Pp.X.add(&Pp.Z); // X_p + Z_p

    let t5 = t1.mul(&t4); // (X_m - Z_m)(X_p + Z_p)
    let t6 = t2.mul(&t3); // (X_m + Z_m)(X_p - Z_p)

    // Pseudo-add: the new odd point, normalised by the base point's x.
    Pp.X = t6.add(&t5).square();
    Pp.Z = affine_x.mul(&t6.sub(&t5).square());

    // Double the even point, reusing t1 and t2.
    let bb = t1.square(); // (X_m - Z_m)^2
    let aa = t2.square(); // (X_m + Z_m)^2
    let e = aa.sub(&bb); //  4 X_m Z_m
    Pm.X = bb.mul(&aa);
    Pm.Z = e.mul_small(C::APLUS2_OVER_FOUR).add(&bb).mul(&e);
}

impl MontgomeryPoint<Curve25519> {
    /// The standard Curve25519 base point, \\(x = 9\\).
    pub fn basepoint() -> Curve25519Point {
        MontgomeryPoint(Fp25519::from_u64(crate::constants::BASEPOINT_X))
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
