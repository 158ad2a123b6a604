// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Curve and field constants for Curve25519.

/// The Montgomery curve coefficient \\(A = 486662\\) of Curve25519,
/// \\(v^2 = u^3 + A u^2 + u\\).
pub const MONTGOMERY_A: u64 = 486662;

/// \\((A + 2) / 4 = 121666\\), the constant appearing in the projective
/// doubling formula.
pub const APLUS2_OVER_FOUR: u64 = 121666;

/// Decimal representation of the field prime \\(p = 2^{255} - 19\\).
pub const FIELD_PRIME_DECIMAL: &str =
    "57896044618658097711785492504343953926634992332820282019728792003956564819949";

/// The x-coordinate of the standard Curve25519 base point.
pub const BASEPOINT_X: u64 = 9;

/// Decimal representation of \\(\ell = 2^{252} + 27742317777372353535851937790883648493\\),
/// the order of the base point. \\(\[\ell\]B\\) is the point at infinity.
pub const BASEPOINT_ORDER_DECIMAL: &str =
    "7237005577332262213973186563042994240857116359379907606001950938285454250989";
