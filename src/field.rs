// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2^{255} - 19\\).
//!
//! [`Fp25519`] is the shipped instantiation of the [`FieldElement`]
//! capability. It keeps elements as canonically reduced `num-bigint`
//! integers and delegates all modular arithmetic to that crate; the
//! ladder above it never sees the representation.
//!
//! # Warning
//!
//! `num-bigint` stores digits on the heap and its running time depends
//! on operand values, so this backend is **not** constant time. The
//! [`FieldElement::conditional_swap`] implementation branches on the
//! swap bit. See the crate-level side-channel caveat.

use core::mem;
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::Choice;

use crate::errors::CurveError;
use crate::traits::FieldElement;

/// The field prime \\(2^{255} - 19\\).
fn prime() -> &'static BigUint {
    static PRIME: OnceLock<BigUint> = OnceLock::new();
    PRIME.get_or_init(|| (BigUint::one() << 255u32) - BigUint::from(19u32))
}

/// An element of the prime field of order \\(2^{255} - 19\\), kept
/// canonically reduced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp25519(BigUint);

impl Fp25519 {
    /// Construct from an arbitrary integer, reducing modulo \\(p\\).
    pub fn from_biguint(n: BigUint) -> Fp25519 {
        Fp25519(n % prime())
    }

    /// The canonical value in \\([0, p)\\).
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl FieldElement for Fp25519 {
    fn zero() -> Fp25519 {
        Fp25519(BigUint::zero())
    }

    fn one() -> Fp25519 {
        Fp25519(BigUint::one())
    }

    fn from_u64(n: u64) -> Fp25519 {
        Fp25519::from_biguint(BigUint::from(n))
    }

    fn from_decimal(s: &str) -> Result<Fp25519, CurveError> {
        let n = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(CurveError::InvalidDecimal)?;
        Ok(Fp25519::from_biguint(n))
    }

    fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn add(&self, rhs: &Fp25519) -> Fp25519 {
        Fp25519((&self.0 + &rhs.0) % prime())
    }

    fn sub(&self, rhs: &Fp25519) -> Fp25519 {
        // Lift above p before subtracting; BigUint has no negatives.
        Fp25519((prime() + &self.0 - &rhs.0) % prime())
    }

    fn mul(&self, rhs: &Fp25519) -> Fp25519 {
        Fp25519((&self.0 * &rhs.0) % prime())
    }

    fn square(&self) -> Fp25519 {
        Fp25519((&self.0 * &self.0) % prime())
    }

    fn mul_small(&self, k: u64) -> Fp25519 {
        Fp25519((&self.0 * k) % prime())
    }

    fn invert(&self) -> Result<Fp25519, CurveError> {
        if self.0.is_zero() {
            return Err(CurveError::InversionOfZero);
        }
        // Fermat: a^(p-2) = a^(-1) mod p for a != 0.
        let exponent = prime() - BigUint::from(2u32);
        Ok(Fp25519(self.0.modpow(&exponent, prime())))
    }

    fn conditional_swap(a: &mut Fp25519, b: &mut Fp25519, choice: Choice) {
        // Variable time: heap-allocated digits rule out a masked
        // limbwise swap. The Choice seam is kept so a fixed-limb
        // backend can honour it.
        if bool::from(choice) {
            mem::swap(a, b);
        }
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
