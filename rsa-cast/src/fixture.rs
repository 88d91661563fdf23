/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Fixed RSA key material for the known-answer test.
//!
//! The reference key is the 2048-bit test key from RFC 9500, section 2.1.
//! It is only ever used by the self-test.

use std::fmt;

use crate::crypto::{RsaComponents, RsaPrivateOps};
use crate::error::Error;

/// Big-endian encodings of a private key and its CRT parameters.
#[derive(Clone, Copy)]
pub struct PrivateKeyFixture {
    pub modulus: &'static [u8],
    pub public_exponent: u32,
    pub private_exponent: &'static [u8],
    pub prime_p: &'static [u8],
    pub prime_q: &'static [u8],
    pub crt_exponent_dp: &'static [u8],
    pub crt_exponent_dq: &'static [u8],
    pub crt_coefficient: &'static [u8],
}

impl fmt::Debug for PrivateKeyFixture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrivateKeyFixture")
            .field("modulus_len", &self.modulus_len())
            .field("public_exponent", &self.public_exponent)
            .finish()
    }
}

/// The RFC 9500 `testRSA2048` key.
pub const REFERENCE_KEY: PrivateKeyFixture = PrivateKeyFixture {
    modulus: &MODULUS,
    public_exponent: 65537,
    private_exponent: &PRIVATE_EXPONENT,
    prime_p: &PRIME_P,
    prime_q: &PRIME_Q,
    crt_exponent_dp: &CRT_EXPONENT_DP,
    crt_exponent_dq: &CRT_EXPONENT_DQ,
    crt_coefficient: &CRT_COEFFICIENT,
};

impl PrivateKeyFixture {
    /// Length in bytes of the modulus, and of a signature made with this key.
    pub fn modulus_len(&self) -> usize {
        self.modulus.len()
    }

    pub fn components(&self) -> RsaComponents<'static> {
        RsaComponents {
            n: self.modulus,
            e: self.public_exponent,
            d: self.private_exponent,
            p: self.prime_p,
            q: self.prime_q,
            dp: self.crt_exponent_dp,
            dq: self.crt_exponent_dq,
            qinv: self.crt_coefficient,
        }
    }

    /// Builds a backend key from the fixture. The backend parses and
    /// range-checks every component.
    ///
    /// Any failure here means the embedded constants are corrupt.
    pub fn build<K: RsaPrivateOps>(&self) -> Result<K, Error> {
        K::from_components(&self.components()).map_err(|e| Error::construction("key", e.to_string()))
    }
}

const MODULUS: [u8; 256] = [
    0xb0, 0xf9, 0xe8, 0x19, 0x43, 0xa7, 0xae, 0x98, 0x92, 0xaa, 0xde, 0x17,
    0xca, 0x7c, 0x40, 0xf8, 0x74, 0x4f, 0xed, 0x2f, 0x81, 0x48, 0xe6, 0xc8,
    0xea, 0xa2, 0x7b, 0x7d, 0x00, 0x15, 0x48, 0xfb, 0x51, 0x92, 0xab, 0x28,
    0xb5, 0x6c, 0x50, 0x60, 0xb1, 0x18, 0xcc, 0xd1, 0x31, 0xe5, 0x94, 0x87,
    0x4c, 0x6c, 0xa9, 0x89, 0xb5, 0x6c, 0x27, 0x29, 0x6f, 0x09, 0xfb, 0x93,
    0xa0, 0x34, 0xdf, 0x32, 0xe9, 0x7c, 0x6f, 0xf0, 0x99, 0x8c, 0xfd, 0x8e,
    0x6f, 0x42, 0xdd, 0xa5, 0x8a, 0xcd, 0x1f, 0xa9, 0x79, 0x86, 0xf1, 0x44,
    0xf3, 0xd1, 0x54, 0xd6, 0x76, 0x50, 0x17, 0x5e, 0x68, 0x54, 0xb3, 0xa9,
    0x52, 0x00, 0x3b, 0xc0, 0x68, 0x87, 0xb8, 0x45, 0x5a, 0xc2, 0xb1, 0x9f,
    0x7b, 0x2f, 0x76, 0x50, 0x4e, 0xbc, 0x98, 0xec, 0x94, 0x55, 0x71, 0xb0,
    0x78, 0x92, 0x15, 0x0d, 0xdc, 0x6a, 0x74, 0xca, 0x0f, 0xbc, 0xd3, 0x54,
    0x97, 0xce, 0x81, 0x53, 0x4d, 0xaf, 0x94, 0x18, 0x84, 0x4b, 0x13, 0xae,
    0xa3, 0x1f, 0x9d, 0x5a, 0x6b, 0x95, 0x57, 0xbb, 0xdf, 0x61, 0x9e, 0xfd,
    0x4e, 0x88, 0x7f, 0x2d, 0x42, 0xb8, 0xdd, 0x8b, 0xc9, 0x87, 0xea, 0xe1,
    0xbf, 0x89, 0xca, 0xb8, 0x5e, 0xe2, 0x1e, 0x35, 0x63, 0x05, 0xdf, 0x6c,
    0x07, 0xa8, 0x83, 0x8e, 0x3e, 0xf4, 0x1c, 0x59, 0x5d, 0xcc, 0xe4, 0x3d,
    0xaf, 0xc4, 0x91, 0x23, 0xef, 0x4d, 0x8a, 0xbb, 0xa9, 0x3d, 0x39, 0x05,
    0xe4, 0x02, 0x8d, 0x7b, 0xa9, 0x14, 0x84, 0xa2, 0x75, 0x96, 0xe0, 0x7b,
    0x4b, 0x6e, 0xd9, 0x92, 0xf0, 0x77, 0xb5, 0x24, 0xd3, 0xdc, 0xfe, 0x7d,
    0xdd, 0x55, 0x49, 0xbe, 0x7c, 0xce, 0x8d, 0xa0, 0x35, 0xcf, 0xa0, 0xb3,
    0xfb, 0x8f, 0x9e, 0x46, 0xf7, 0x32, 0xb2, 0xa8, 0x6b, 0x46, 0x01, 0x65,
    0xc0, 0x8f, 0x53, 0x13,
];

const PRIVATE_EXPONENT: [u8; 256] = [
    0x41, 0x18, 0x8b, 0x20, 0xcf, 0xdb, 0xdb, 0xc2, 0xcf, 0x1f, 0xfe, 0x75,
    0x2d, 0xcb, 0xaa, 0x72, 0x39, 0x06, 0x35, 0x2e, 0x26, 0x15, 0xd4, 0x9d,
    0xce, 0x80, 0x59, 0x7f, 0xcf, 0x0a, 0x05, 0x40, 0x3b, 0xef, 0x00, 0xfa,
    0x06, 0x51, 0x82, 0xf7, 0x2d, 0xec, 0xfb, 0x59, 0x6f, 0x4b, 0x0c, 0xe8,
    0xff, 0x59, 0x70, 0xba, 0xf0, 0x7a, 0x89, 0xa5, 0x19, 0xec, 0xc8, 0x16,
    0xb2, 0xf4, 0xff, 0xac, 0x50, 0x69, 0xaf, 0x1b, 0x06, 0xbf, 0xef, 0x7b,
    0xf6, 0xbc, 0xd7, 0x9e, 0x4e, 0x81, 0xc8, 0xc5, 0xa3, 0xa7, 0xd9, 0x13,
    0x0d, 0xc3, 0xcf, 0xba, 0xda, 0xe5, 0xf6, 0xd2, 0x88, 0xf9, 0xae, 0xe3,
    0xf6, 0xff, 0x92, 0xfa, 0xe0, 0xf8, 0x1a, 0xf5, 0x97, 0xbe, 0xc9, 0x6a,
    0xe9, 0xfa, 0xb9, 0x40, 0x2c, 0xd5, 0xfe, 0x41, 0xf7, 0x05, 0xbe, 0xbd,
    0xb4, 0x7b, 0xb7, 0x36, 0xd3, 0xfe, 0x6c, 0x5a, 0x51, 0xe0, 0xe2, 0x07,
    0x32, 0xa9, 0x7b, 0x5e, 0x46, 0xc1, 0xcb, 0xdb, 0x26, 0xd7, 0x48, 0x54,
    0xc6, 0xb6, 0x60, 0x4a, 0xed, 0x46, 0x37, 0x35, 0xff, 0x90, 0x76, 0x04,
    0x65, 0x57, 0xca, 0xf9, 0x49, 0xbf, 0x44, 0x88, 0x95, 0xc2, 0x04, 0x32,
    0xc1, 0xe0, 0x9c, 0x01, 0x4e, 0xa7, 0x56, 0x60, 0x43, 0x4f, 0x1a, 0x0f,
    0x3b, 0xe2, 0x94, 0xba, 0xbc, 0x5d, 0x53, 0x0e, 0x6a, 0x10, 0x21, 0x3f,
    0x53, 0xb6, 0x03, 0x75, 0xfc, 0x84, 0xa7, 0x57, 0x3f, 0x2a, 0xf1, 0x21,
    0x55, 0x84, 0xf5, 0xb4, 0xbd, 0xa6, 0xd4, 0xe8, 0xf9, 0xe1, 0x7a, 0x78,
    0xd9, 0x7e, 0x77, 0xb8, 0x6d, 0xa4, 0xa1, 0x84, 0x64, 0x75, 0x31, 0x8a,
    0x7a, 0x10, 0xa5, 0x61, 0x01, 0x4e, 0xff, 0xa2, 0x3a, 0x81, 0xec, 0x56,
    0xe9, 0xe4, 0x10, 0x9d, 0xef, 0x8c, 0xb3, 0xf7, 0x97, 0x22, 0x3f, 0x7d,
    0x8d, 0x0d, 0x43, 0x51,
];

const PRIME_P: [u8; 128] = [
    0xdd, 0x10, 0x57, 0x02, 0x38, 0x2f, 0x23, 0x2b, 0x36, 0x81, 0xf5, 0x37,
    0x91, 0xe2, 0x26, 0x17, 0xc7, 0xbf, 0x4e, 0x9a, 0xcb, 0x81, 0xed, 0x48,
    0xda, 0xf6, 0xd6, 0x99, 0x5d, 0xa3, 0xea, 0xb6, 0x42, 0x83, 0x9a, 0xff,
    0x01, 0x2d, 0x2e, 0xa6, 0x28, 0xb9, 0x0a, 0xf2, 0x79, 0xfd, 0x3e, 0x6f,
    0x7c, 0x93, 0xcd, 0x80, 0xf0, 0x72, 0xf0, 0x1f, 0xf2, 0x44, 0x3b, 0x3e,
    0xe8, 0xf2, 0x4e, 0xd4, 0x69, 0xa7, 0x96, 0x13, 0xa4, 0x1b, 0xd2, 0x40,
    0x20, 0xf9, 0x2f, 0xd1, 0x10, 0x59, 0xbd, 0x1d, 0x0f, 0x30, 0x1b, 0x5b,
    0xa7, 0xa9, 0xd3, 0x63, 0x7c, 0xa8, 0xd6, 0x5c, 0x1a, 0x98, 0x15, 0x41,
    0x7d, 0x8e, 0xab, 0x73, 0x4b, 0x0b, 0x4f, 0x3a, 0x2c, 0x66, 0x1d, 0x9a,
    0x1a, 0x82, 0xf3, 0xac, 0x73, 0x4c, 0x40, 0x53, 0x06, 0x69, 0xab, 0x8e,
    0x47, 0x30, 0x45, 0xa5, 0x8e, 0x65, 0x53, 0x9d,
];

const PRIME_Q: [u8; 128] = [
    0xcc, 0xf1, 0xe5, 0xbb, 0x90, 0xc8, 0xe9, 0x78, 0x1e, 0xa7, 0x5b, 0xeb,
    0xf1, 0x0b, 0xc2, 0x52, 0xe1, 0x1e, 0xb0, 0x23, 0xa0, 0x26, 0x0f, 0x18,
    0x87, 0x55, 0x2a, 0x56, 0x86, 0x3f, 0x4a, 0x64, 0x21, 0xe8, 0xc6, 0x00,
    0xbf, 0x52, 0x3d, 0x6c, 0xb1, 0xb0, 0xad, 0xbd, 0xd6, 0x5b, 0xfe, 0xe4,
    0xa8, 0x8a, 0x03, 0x7e, 0x3d, 0x1a, 0x41, 0x5e, 0x5b, 0xb9, 0x56, 0x48,
    0xda, 0x5a, 0x0c, 0xa2, 0x6b, 0x54, 0xf4, 0xa6, 0x39, 0x48, 0x52, 0x2c,
    0x3d, 0x5f, 0x89, 0xb9, 0x4a, 0x72, 0xef, 0xff, 0x95, 0x13, 0x4d, 0x59,
    0x40, 0xce, 0x45, 0x75, 0x8f, 0x30, 0x89, 0x80, 0x90, 0x89, 0x56, 0x58,
    0x8e, 0xef, 0x57, 0x5b, 0x3e, 0x4b, 0xc4, 0xc3, 0x68, 0xcf, 0xe8, 0x13,
    0xee, 0x9c, 0x25, 0x2c, 0x2b, 0x02, 0xe0, 0xdf, 0x91, 0xf1, 0xaa, 0x01,
    0x93, 0x8d, 0x38, 0x68, 0x5d, 0x60, 0xba, 0x6f,
];

const CRT_EXPONENT_DP: [u8; 128] = [
    0x09, 0xed, 0x54, 0xea, 0xed, 0x98, 0xf8, 0x4c, 0x55, 0x7b, 0x4a, 0x86,
    0xbf, 0x4f, 0x57, 0x84, 0x93, 0xdc, 0xbc, 0x6b, 0xe9, 0x1d, 0xa1, 0x89,
    0x37, 0x04, 0x04, 0xa9, 0x08, 0x72, 0x76, 0xf4, 0xce, 0x51, 0xd8, 0xa1,
    0x00, 0xed, 0x85, 0x7d, 0xc2, 0xb0, 0x64, 0x94, 0x74, 0xf3, 0xf1, 0x5c,
    0xd2, 0x4c, 0x54, 0xdb, 0x28, 0x71, 0x10, 0xe5, 0x6e, 0x5c, 0xb0, 0x08,
    0x68, 0x2f, 0x91, 0x68, 0xaa, 0x81, 0xf3, 0x14, 0x58, 0xb7, 0x43, 0x1e,
    0xcc, 0x1c, 0x44, 0x90, 0x6f, 0xda, 0x87, 0xca, 0x89, 0x47, 0x10, 0xc3,
    0x71, 0xe9, 0x07, 0x6c, 0x1d, 0x49, 0xfb, 0xae, 0x51, 0x27, 0x69, 0x34,
    0xf2, 0xad, 0x78, 0x77, 0x89, 0xf4, 0x2d, 0x0f, 0xa0, 0xb4, 0xc9, 0x39,
    0x85, 0x5d, 0x42, 0x12, 0x09, 0x6f, 0x70, 0x28, 0x0a, 0x4e, 0xae, 0x7c,
    0x8a, 0x27, 0xd9, 0xc8, 0xd0, 0x77, 0x2e, 0x65,
];

const CRT_EXPONENT_DQ: [u8; 128] = [
    0x8c, 0xb6, 0x85, 0x7a, 0x7b, 0xd5, 0x46, 0x5f, 0x80, 0x04, 0x7e, 0x9b,
    0x87, 0xbc, 0x00, 0x27, 0x31, 0x84, 0x05, 0x81, 0xe0, 0x62, 0x61, 0x39,
    0x01, 0x2a, 0x5b, 0x50, 0x5f, 0x0a, 0x33, 0x84, 0x7e, 0xb7, 0xb8, 0xc3,
    0x28, 0x99, 0x49, 0xad, 0x48, 0x6f, 0x3b, 0x4b, 0x3d, 0x53, 0x9a, 0xb5,
    0xda, 0x76, 0x30, 0x21, 0xcb, 0xc8, 0x2c, 0x1b, 0xa2, 0x34, 0xa5, 0x66,
    0x8d, 0xed, 0x08, 0x01, 0xb8, 0x59, 0xf3, 0x43, 0xf1, 0xce, 0x93, 0x04,
    0xe6, 0xfa, 0xa2, 0xb0, 0x02, 0xca, 0xd9, 0xb7, 0x8c, 0xde, 0x5c, 0xdc,
    0x2c, 0x1f, 0xb4, 0x17, 0x1c, 0x42, 0x42, 0x16, 0x70, 0xa6, 0xab, 0x0f,
    0x50, 0xcc, 0x4a, 0x19, 0x4e, 0xb3, 0x6d, 0x1c, 0x91, 0xe9, 0x35, 0xba,
    0x01, 0xb9, 0x59, 0xd8, 0x72, 0x8b, 0x9e, 0x64, 0x42, 0x6b, 0x3f, 0xc3,
    0xa7, 0x50, 0x6d, 0xeb, 0x52, 0x39, 0xa8, 0xa7,
];

const CRT_COEFFICIENT: [u8; 128] = [
    0x0a, 0x81, 0xd8, 0xa6, 0x18, 0x31, 0x4a, 0x80, 0x3a, 0xf6, 0x1c, 0x06,
    0x71, 0x1f, 0x2c, 0x39, 0xb2, 0x66, 0xff, 0x41, 0x4d, 0x53, 0x47, 0x6d,
    0x1d, 0xa5, 0x2a, 0x43, 0x18, 0xaa, 0xfe, 0x4b, 0x96, 0xf0, 0xda, 0x07,
    0x15, 0x5f, 0x8a, 0x51, 0x34, 0xda, 0xb8, 0x8e, 0xe2, 0x9e, 0x81, 0x68,
    0x07, 0x6f, 0xcd, 0x78, 0xca, 0x79, 0x1a, 0xc6, 0x34, 0x42, 0xa8, 0x1c,
    0xd0, 0x69, 0x39, 0x27, 0xd8, 0x08, 0xe3, 0x35, 0xe8, 0xd8, 0xcb, 0xf2,
    0x12, 0x19, 0x07, 0x50, 0x9a, 0x57, 0x75, 0x9b, 0x4f, 0x9a, 0x18, 0xfa,
    0x3a, 0x7b, 0x33, 0x37, 0x79, 0xed, 0xde, 0x7a, 0x45, 0x93, 0x84, 0xf8,
    0x44, 0x4a, 0xda, 0xec, 0xff, 0xec, 0x95, 0xfd, 0x55, 0x2b, 0x0c, 0xfc,
    0xb6, 0xc7, 0xf6, 0x92, 0x62, 0x6d, 0xde, 0x1e, 0xf2, 0x68, 0xa4, 0x0d,
    0x2f, 0x67, 0xb5, 0xc8, 0xaa, 0x38, 0x7f, 0xf7,
];
