// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! x-only scalar multiplication on the Montgomery form of Curve25519.
//!
//! This crate implements the Montgomery ladder over the prime field of
//! order \\(p = 2^{255} - 19\\): given a scalar \\(k\\) and the
//! x-coordinate of a point \\(P\\), it computes the x-coordinate of
//! \\(\[k\]P\\) using only projective \\(X : Z\\) pairs, never
//! recovering \\(y\\).
//!
//! The ladder itself is generic over a [`FieldElement`] capability and a
//! [`MontgomeryCurve`] carrying the curve constant, so the field backend
//! is replaceable; the shipped instantiation is [`Fp25519`], which
//! delegates modular arithmetic to `num-bigint`.
//!
//! # Example
//!
//! ```
//! use curve25519_ladder::{Curve25519Point, Scalar};
//!
//! let base = Curve25519Point::from_decimal("9").unwrap();
//! let k = Scalar::from_decimal("21348576").unwrap();
//! let product = base.mul(&k).unwrap();
//! assert_eq!(
//!     product.to_decimal(),
//!     "41997946188900899765386654308659138458075678198510993406872786965860753215250",
//! );
//! ```
//!
//! # Scalars are raw integers
//!
//! Unlike the RFC 7748 X25519 function, nothing here clamps, masks, or
//! byte-encodes the scalar: the multiplier is the decimal integer you
//! pass in, and the result is the exact multiple \\(\[k\]P\\).
//!
//! # Side-channel caveat
//!
//! The ladder's control flow is constant-structure and the scalar bit
//! enters each iteration only through a `subtle::Choice`, but the
//! `num-bigint` backend allocates digits on the heap and is **not**
//! constant time. Handling genuinely secret scalars requires a
//! fixed-limb [`FieldElement`] implementation behind the same trait.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod errors;
pub mod field;
pub mod montgomery;
pub mod scalar;
pub mod traits;

pub use crate::errors::CurveError;
pub use crate::field::Fp25519;
pub use crate::montgomery::{Curve25519, Curve25519Point, MontgomeryPoint};
pub use crate::scalar::Scalar;
pub use crate::traits::{FieldElement, Identity, MontgomeryCurve};
