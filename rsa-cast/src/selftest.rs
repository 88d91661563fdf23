/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use subtle::ConstantTimeEq;

use crate::crypto::{RsaPrivateOps, RsaPublicOps};
use crate::error::Error;
use crate::fixture::PrivateKeyFixture;
use crate::vector::KnownAnswerVector;

/// Compares every byte of both signatures, without an early exit on the
/// first difference.
fn signatures_equal(actual: &[u8], expected: &[u8]) -> bool {
    actual.len() == expected.len() && bool::from(actual.ct_eq(expected))
}

/// Signs the vector's digest with `key`, verifies the signature and checks
/// it against the known answer.
pub fn run_known_answer_test<K: RsaPrivateOps>(
    key: &PrivateKeyFixture,
    vector: &KnownAnswerVector,
) -> Result<(), Error> {
    let private: K = key.build()?;
    let hash = vector.algorithm.hash;

    let sig = private.sign_pkcs1v1_5(hash, vector.digest).map_err(Error::sign)?;

    let public = private.public_key().map_err(Error::verify)?;
    public
        .verify_pkcs1v1_5(hash, vector.digest, &sig)
        .map_err(Error::verify)?;

    if !signatures_equal(&sig, vector.expected_signature) {
        return Err(Error::ResultMismatch);
    }
    Ok(())
}

/// Runs the RSASSA-PKCS-v1.5 known-answer test against the OpenSSL backend.
#[cfg(feature = "crypto-openssl")]
pub fn run_self_test() -> Result<(), Error> {
    use crate::fixture::REFERENCE_KEY;
    use crate::vector::REFERENCE_VECTOR;

    run_known_answer_test::<openssl::rsa::Rsa<openssl::pkey::Private>>(&REFERENCE_KEY, &REFERENCE_VECTOR)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::crypto::{HashAlgorithm, RsaComponents};
    use crate::fixture::REFERENCE_KEY;
    use crate::vector::REFERENCE_VECTOR;

    #[derive(Clone, Copy)]
    enum Fault {
        None,
        Construct,
        Sign,
        Verify,
        WrongSignature,
    }

    /// Echoes the expected signature, or misbehaves as told.
    struct Scripted(Fault);

    thread_local! {
        static FAULT: std::cell::Cell<Fault> = std::cell::Cell::new(Fault::None);
    }

    fn with_fault<T>(fault: Fault, f: impl FnOnce() -> T) -> T {
        FAULT.with(|c| c.set(fault));
        let ret = f();
        FAULT.with(|c| c.set(Fault::None));
        ret
    }

    fn fault(msg: &str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, msg.to_owned())
    }

    impl RsaPrivateOps for Scripted {
        type Error = io::Error;
        type Public = Scripted;

        fn from_components(_: &RsaComponents) -> Result<Self, Self::Error> {
            match FAULT.with(|c| c.get()) {
                Fault::Construct => Err(fault("modulus: modulus must be odd")),
                f => Ok(Scripted(f)),
            }
        }

        fn public_key(&self) -> Result<Self::Public, Self::Error> {
            Ok(Scripted(self.0))
        }

        fn sign_pkcs1v1_5(&self, _: HashAlgorithm, _: &[u8]) -> Result<Vec<u8>, Self::Error> {
            match self.0 {
                Fault::Sign => Err(fault("arithmetic fault")),
                Fault::WrongSignature => Ok(vec![0; REFERENCE_VECTOR.expected_signature.len()]),
                _ => Ok(REFERENCE_VECTOR.expected_signature.to_vec()),
            }
        }
    }

    impl RsaPublicOps for Scripted {
        type Error = io::Error;

        fn bits(&self) -> usize {
            2048
        }

        fn n(&self) -> Vec<u8> {
            REFERENCE_KEY.modulus.to_vec()
        }

        fn e(&self) -> Vec<u8> {
            vec![1, 0, 1]
        }

        fn verify_pkcs1v1_5(&self, _: HashAlgorithm, _: &[u8], _: &[u8]) -> Result<(), Self::Error> {
            match self.0 {
                Fault::Verify => Err(fault("bad signature")),
                _ => Ok(()),
            }
        }
    }

    fn run_scripted(fault: Fault) -> Result<(), Error> {
        with_fault(fault, || run_known_answer_test::<Scripted>(&REFERENCE_KEY, &REFERENCE_VECTOR))
    }

    #[test]
    fn scripted_pass() {
        run_scripted(Fault::None).unwrap();
    }

    #[test]
    fn sign_error_is_primitive() {
        match run_scripted(Fault::Sign).unwrap_err() {
            Error::Primitive { operation, .. } => assert_eq!(operation, crate::error::Operation::Sign),
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn verify_error_is_primitive() {
        match run_scripted(Fault::Verify).unwrap_err() {
            Error::Primitive { operation, .. } => assert_eq!(operation, crate::error::Operation::Verify),
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn wrong_signature_is_mismatch() {
        assert!(run_scripted(Fault::WrongSignature).unwrap_err().is_result_mismatch());
    }

    #[test]
    fn construction_error_stops_before_signing() {
        let err = run_scripted(Fault::Construct).unwrap_err();
        assert!(err.is_construction());
        assert!(err.to_string().contains("modulus must be odd"), "{}", err);
    }

    #[test]
    fn compare_examines_lengths() {
        assert!(signatures_equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(!signatures_equal(&[1, 2, 3], &[1, 2, 4]));
        assert!(!signatures_equal(&[1, 2], &[1, 2, 3]));
        assert!(!signatures_equal(&[], &[0]));
    }

    #[cfg(feature = "crypto-openssl")]
    mod with_openssl {
        use ::openssl::pkey::Private;
        use ::openssl::rsa::Rsa;

        use super::*;

        fn leak(bytes: Vec<u8>) -> &'static [u8] {
            Box::leak(bytes.into_boxed_slice())
        }

        #[test]
        fn reference_vector_passes() {
            run_self_test().unwrap();
        }

        #[test]
        fn mutated_expected_signature() {
            for &idx in &[0, 100, 255] {
                let mut want = REFERENCE_VECTOR.expected_signature.to_vec();
                want[idx] ^= 0x01;
                let mut vector = REFERENCE_VECTOR;
                vector.expected_signature = leak(want);
                let err = run_known_answer_test::<Rsa<Private>>(&REFERENCE_KEY, &vector).unwrap_err();
                assert!(err.is_result_mismatch(), "byte {}: {:?}", idx, err);
            }
        }

        #[test]
        fn mutated_modulus_never_passes() {
            for &idx in &[0, 17, 128, 254, 255] {
                let mut n = REFERENCE_KEY.modulus.to_vec();
                n[idx] ^= 0x02;
                let mut key = REFERENCE_KEY;
                key.modulus = leak(n);
                let err = run_known_answer_test::<Rsa<Private>>(&key, &REFERENCE_VECTOR).unwrap_err();
                assert!(
                    err.is_construction() || err.is_primitive() || err.is_result_mismatch(),
                    "byte {}: {:?}",
                    idx,
                    err
                );
            }
        }
    }
}
