/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![cfg_attr(not(feature="crypto-openssl"),allow(unused))]

use super::*;
use crate::fixture::REFERENCE_KEY;
use crate::vector::REFERENCE_VECTOR;

fn test_rsa<K: RsaPrivateOps>(key: &K) {
    let public = key.public_key().unwrap();
    assert_eq!(public.bits(), 2048);
    assert_eq!(&public.n()[..], REFERENCE_KEY.modulus);
    assert_eq!(&public.e()[..], [0x01, 0x00, 0x01]);

    let hash = REFERENCE_VECTOR.algorithm.hash;
    let sig = key.sign_pkcs1v1_5(hash, REFERENCE_VECTOR.digest).unwrap();
    assert_eq!(&sig[..], REFERENCE_VECTOR.expected_signature);
    public.verify_pkcs1v1_5(hash, REFERENCE_VECTOR.digest, &sig).unwrap();

    for &bit in &[0usize, 7, 100, 255] {
        let mut digest = REFERENCE_VECTOR.digest.to_vec();
        digest[bit / 8] ^= 1 << (bit % 8);
        assert!(public.verify_pkcs1v1_5(hash, &digest, &sig).is_err(), "bit {}", bit);
    }

    let mut bad = sig.clone();
    bad[128] ^= 0x80;
    assert!(public.verify_pkcs1v1_5(hash, REFERENCE_VECTOR.digest, &bad).is_err());
    assert!(public.verify_pkcs1v1_5(hash, REFERENCE_VECTOR.digest, &sig[1..]).is_err());
}

#[cfg(feature = "crypto-openssl")]
mod openssl_backend {
    use ::openssl::bn::{BigNum, BigNumContext};
    use ::openssl::pkey::Private;
    use ::openssl::rsa::Rsa;

    use super::*;

    fn key() -> Rsa<Private> {
        Rsa::from_components(&REFERENCE_KEY.components()).unwrap()
    }

    fn bn(bytes: &[u8]) -> BigNum {
        BigNum::from_slice(bytes).unwrap()
    }

    #[test]
    fn openssl_rsa() {
        test_rsa(&key())
    }

    #[test]
    fn reference_key_is_consistent() {
        assert!(key().check_key().unwrap());
    }

    #[test]
    fn reference_key_arithmetic() {
        let mut ctx = BigNumContext::new().unwrap();
        let one = BigNum::from_u32(1).unwrap();
        let n = bn(REFERENCE_KEY.modulus);
        let p = bn(REFERENCE_KEY.prime_p);
        let q = bn(REFERENCE_KEY.prime_q);
        let d = bn(REFERENCE_KEY.private_exponent);

        let mut pq = BigNum::new().unwrap();
        pq.checked_mul(&p, &q, &mut ctx).unwrap();
        assert_eq!(pq, n);

        let mut p1 = BigNum::new().unwrap();
        p1.checked_sub(&p, &one).unwrap();
        let mut q1 = BigNum::new().unwrap();
        q1.checked_sub(&q, &one).unwrap();

        let mut dp = BigNum::new().unwrap();
        dp.nnmod(&d, &p1, &mut ctx).unwrap();
        assert_eq!(dp, bn(REFERENCE_KEY.crt_exponent_dp));

        let mut dq = BigNum::new().unwrap();
        dq.nnmod(&d, &q1, &mut ctx).unwrap();
        assert_eq!(dq, bn(REFERENCE_KEY.crt_exponent_dq));

        let mut qinv_q = BigNum::new().unwrap();
        qinv_q
            .mod_mul(&bn(REFERENCE_KEY.crt_coefficient), &q, &p, &mut ctx)
            .unwrap();
        assert_eq!(qinv_q, one);
    }

    fn component_error(components: &RsaComponents) -> (&'static str, &'static str) {
        match Rsa::<Private>::from_components(components) {
            Err(OpensslRsaError::Component { component, reason }) => (component, reason),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
    }

    #[test]
    fn out_of_range_components() {
        let mut even = REFERENCE_KEY.modulus.to_vec();
        even[255] ^= 1;
        let c = RsaComponents { n: &even, ..REFERENCE_KEY.components() };
        assert_eq!(component_error(&c), ("modulus", "modulus must be odd"));

        let c = RsaComponents { n: &[], ..REFERENCE_KEY.components() };
        assert_eq!(component_error(&c), ("modulus", "modulus must be greater than one"));

        let c = RsaComponents { d: REFERENCE_KEY.modulus, ..REFERENCE_KEY.components() };
        assert_eq!(component_error(&c), ("private exponent", "value is not reduced"));

        let wide = [0x01; 257];
        let c = RsaComponents { p: &wide, ..REFERENCE_KEY.components() };
        assert_eq!(component_error(&c), ("prime p", "wider than the modulus"));

        let mut qinv = REFERENCE_KEY.prime_p.to_vec();
        qinv[0] = 0xff;
        let c = RsaComponents { qinv: &qinv, ..REFERENCE_KEY.components() };
        assert_eq!(component_error(&c), ("CRT coefficient", "value is not reduced"));

        let c = RsaComponents { e: 65536, ..REFERENCE_KEY.components() };
        assert_eq!(component_error(&c), ("public exponent", "must be odd and greater than one"));
    }

    #[test]
    fn digest_length_is_checked() {
        let key = key();
        let public = key.public_key().unwrap();
        let short = &REFERENCE_VECTOR.digest[..31];
        match key.sign_pkcs1v1_5(HashAlgorithm::Sha256, short) {
            Err(OpensslRsaError::Length { hash: HashAlgorithm::Sha256, len: 31 }) => (),
            r => panic!("unexpected result: {:?}", r),
        }
        match public.verify_pkcs1v1_5(HashAlgorithm::Sha384, REFERENCE_VECTOR.digest, REFERENCE_VECTOR.expected_signature) {
            Err(OpensslRsaError::Length { hash: HashAlgorithm::Sha384, len: 32 }) => (),
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn other_hashes() {
        let key = key();
        let public = key.public_key().unwrap();
        for &hash in &[HashAlgorithm::Sha384, HashAlgorithm::Sha512] {
            let digest = vec![0x5a; hash.digest_len()];
            let sig = key.sign_pkcs1v1_5(hash, &digest).unwrap();
            assert_eq!(sig.len(), 256);
            public.verify_pkcs1v1_5(hash, &digest, &sig).unwrap();
            // Same digest bytes, different DigestInfo.
            assert!(public.verify_pkcs1v1_5(HashAlgorithm::Sha256, &digest[..32], &sig).is_err());
        }
    }
}
