/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Cryptographic algorithm self-test (CAST) for RSASSA-PKCS-v1.5.
//!
//! Before an RSA signing primitive is trusted with real keys, it must
//! reproduce a known answer: a fixed 2048-bit key signs a fixed SHA-256
//! digest, the signature is verified, and the result must equal an embedded
//! signature byte for byte. The test runs at most once per process, no
//! matter how many threads ask for it.
//!
//! ```no_run
//! rsa_cast::register_self_tests();
//! if let Err(e) = rsa_cast::self_test() {
//!     panic!("refusing to continue: {}", e);
//! }
//! ```
#![deny(warnings)]

pub mod cast;
pub mod crypto;
pub mod error;
pub mod fips;
pub mod fixture;
pub mod selftest;
pub mod vector;

pub use crate::cast::{Cast, SelfTestOutcome};
pub use crate::error::{Error, Operation};

/// Name under which the RSA self-test is registered and reported.
pub const CAST_NAME: &str = "RSASSA-PKCS-v1.5 2048-bit sign and verify";

#[cfg(feature = "crypto-openssl")]
pub static RSA_PKCS1V15_CAST: Cast = Cast::new(CAST_NAME, selftest::run_self_test);

/// The signature scheme and hash exercised, for diagnostics.
pub fn algorithm_identifier() -> vector::Algorithm {
    vector::REFERENCE_VECTOR.algorithm
}

#[cfg(feature = "crypto-openssl")]
pub fn register_self_tests() {
    fips::register(&RSA_PKCS1V15_CAST);
}

/// Runs the RSA self-test if it has not run in this process yet, and
/// returns its result. The test is registered with [`fips`] on first use,
/// so its outcome always counts towards [`fips::operational`].
#[cfg(feature = "crypto-openssl")]
pub fn self_test() -> Result<(), Error> {
    RSA_PKCS1V15_CAST.run()
}

/// State of the RSA self-test, without running it.
#[cfg(feature = "crypto-openssl")]
pub fn outcome() -> SelfTestOutcome {
    RSA_PKCS1V15_CAST.outcome()
}
