// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Integration tests for x-only scalar multiplication.
//!
//! The known-answer values were computed with an independent affine
//! implementation of the Curve25519 group law over the same field.

use num_bigint::{BigUint, RandBigInt};

use curve25519_ladder::constants::BASEPOINT_ORDER_DECIMAL;
use curve25519_ladder::{Curve25519Point, CurveError, Identity, Scalar};

/// x([2]B) for the standard base point B with x = 9.
const BASEPOINT_DOUBLE_X: &str =
    "14847277145635483483963372537557091634710985132825781088887140890597596352251";

#[test]
fn multiplying_by_one_returns_the_basepoint() {
    let b = Curve25519Point::basepoint();
    let one = Scalar::from_decimal("1").unwrap();
    assert_eq!(b.mul(&one).unwrap().to_decimal(), "9");
}

#[test]
fn multiplying_by_two_matches_doubling() {
    let b = Curve25519Point::basepoint();
    let two = Scalar::from_decimal("2").unwrap();
    assert_eq!(b.mul(&two).unwrap().to_decimal(), BASEPOINT_DOUBLE_X);
    assert_eq!(b.double().unwrap().to_decimal(), BASEPOINT_DOUBLE_X);
}

#[test]
fn double_of_double_is_times_four() {
    let b = Curve25519Point::basepoint();
    let four = Scalar::from(4u64);
    assert_eq!(b.double().unwrap().double().unwrap(), b.mul(&four).unwrap());
}

/// The worked example shipped with the original reference driver:
/// key = 21348576, x = 9, checked there against Magma.
#[test]
fn reference_vector_21348576() {
    let b = Curve25519Point::basepoint();
    let k = Scalar::from_decimal("21348576").unwrap();
    assert_eq!(
        b.mul(&k).unwrap().to_decimal(),
        "41997946188900899765386654308659138458075678198510993406872786965860753215250",
    );
}

/// A 255-bit scalar, k = 2^254 + 987654321.
#[test]
fn reference_vector_wide_scalar() {
    let b = Curve25519Point::basepoint();
    let k = Scalar::from_decimal(
        "28948022309329048855892746252171976963317496166410141009864396001979270064305",
    )
    .unwrap();
    assert_eq!(
        b.mul(&k).unwrap().to_decimal(),
        "42903228167732325520391936463779399941867405894733566806316649949436129442484",
    );
}

/// Scalar multiplication composes: [a]([b]P) = [ab]P.
#[test]
fn scalar_multiplication_composes() {
    let b = Curve25519Point::basepoint();
    let a_k = Scalar::from(123456789u64);
    let b_k = Scalar::from(987654321u64);
    let ab_k = Scalar::from(123456789u64 * 987654321u64);

    let via_two_steps = b.mul(&b_k).unwrap().mul(&a_k).unwrap();
    let direct = b.mul(&ab_k).unwrap();
    assert_eq!(via_two_steps, direct);
    assert_eq!(
        direct.to_decimal(),
        "29145551002840770752114513458913266078987102565298228707050194176425365398474",
    );
}

#[test]
fn scalar_multiplication_composes_randomized() {
    let mut rng = rand::thread_rng();
    let b = Curve25519Point::basepoint();
    for _ in 0..8 {
        let x = rng.gen_biguint(30) + BigUint::from(1u32);
        let y = rng.gen_biguint(30) + BigUint::from(1u32);
        let xy = &x * &y;

        let sx = Scalar::try_from_biguint(x).unwrap();
        let sy = Scalar::try_from_biguint(y).unwrap();
        let sxy = Scalar::try_from_biguint(xy).unwrap();

        assert_eq!(b.mul(&sy).unwrap().mul(&sx).unwrap(), b.mul(&sxy).unwrap());
    }
}

/// The same computation on a different base point: [7]([3]B) = [21]B.
#[test]
fn ladder_is_independent_of_the_base_point() {
    let b = Curve25519Point::basepoint();
    let three_b = b.mul(&Scalar::from(3u64)).unwrap();
    let left = three_b.mul(&Scalar::from(7u64)).unwrap();
    let right = b.mul(&Scalar::from(21u64)).unwrap();
    assert_eq!(left, right);
    assert_eq!(
        left.to_decimal(),
        "38848702987127758234457326397796312004574906479512341194676362984878403188505",
    );
}

#[test]
fn zero_scalar_is_the_identity_not_a_crash() {
    let b = Curve25519Point::basepoint();
    let zero = Scalar::from_decimal("0").unwrap();
    assert_eq!(b.mul(&zero).unwrap(), Curve25519Point::identity());
}

/// Multiplying the base point by its order lands on the point at
/// infinity, which has no affine x-coordinate.
#[test]
fn order_times_basepoint_is_infinity() {
    let b = Curve25519Point::basepoint();
    let ell = Scalar::from_decimal(BASEPOINT_ORDER_DECIMAL).unwrap();
    assert_eq!(b.mul(&ell), Err(CurveError::PointAtInfinity));
}

#[test]
fn repeated_invocations_are_deterministic() {
    let mut rng = rand::thread_rng();
    let b = Curve25519Point::basepoint();
    for _ in 0..4 {
        let k = Scalar::try_from_biguint(rng.gen_biguint(255)).unwrap();
        let first = b.mul(&k);
        let second = b.mul(&k);
        assert_eq!(first, second);
        if !k.is_zero() {
            assert_eq!(first.unwrap().to_decimal(), second.unwrap().to_decimal());
        }
    }
}

#[test]
fn oversized_scalars_are_rejected_up_front() {
    // 2^256, one bit too wide.
    let over = (BigUint::from(1u32) << 256u32).to_str_radix(10);
    assert_eq!(
        Scalar::from_decimal(&over),
        Err(CurveError::ScalarTooLarge { bits: 257 }),
    );
}

#[test]
fn malformed_decimal_input_is_rejected() {
    assert_eq!(Scalar::from_decimal("0x12"), Err(CurveError::InvalidDecimal));
    assert_eq!(
        Curve25519Point::from_decimal("nine").unwrap_err(),
        CurveError::InvalidDecimal,
    );
}
