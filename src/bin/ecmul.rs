// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Command-line driver: multiply a Curve25519 point by a scalar.
//!
//! Takes a decimal scalar and a decimal base-point x-coordinate and
//! prints the x-coordinate of the scalar multiple in decimal.

use clap::Parser;

use curve25519_ladder::{Curve25519Point, CurveError, Scalar};

/// x-only scalar multiplication on Curve25519.
#[derive(Parser)]
#[command(name = "ecmul", version)]
struct Args {
    /// The secret key: a non-negative decimal integer below 2^256.
    key: String,
    /// The decimal x-coordinate of the point to multiply.
    base_point: String,
}

fn run(args: &Args) -> Result<String, CurveError> {
    let key = Scalar::from_decimal(&args.key)?;
    let point = Curve25519Point::from_decimal(&args.base_point)?;
    Ok(point.mul(&key)?.to_decimal())
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(x) => println!("{}", x),
        Err(e) => {
            eprintln!("ecmul: {}", e);
            std::process::exit(1);
        }
    }
}
