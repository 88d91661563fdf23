/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

use crate::crypto::HashAlgorithm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Algorithm {
    pub scheme: &'static str,
    pub hash: HashAlgorithm,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.scheme, self.hash)
    }
}

pub const RSASSA_PKCS1V15_SHA256: Algorithm = Algorithm {
    scheme: "RSASSA-PKCS-v1.5",
    hash: HashAlgorithm::Sha256,
};

/// A fixed (input, expected output) pair for the signature primitive.
#[derive(Clone, Copy, Debug)]
pub struct KnownAnswerVector {
    pub algorithm: Algorithm,
    /// Pre-computed hash of the test message. Never recomputed.
    pub digest: &'static [u8],
    pub expected_signature: &'static [u8],
}

/// Signature of the SHA-256 digest `01 02 .. 20` under
/// [`REFERENCE_KEY`](crate::fixture::REFERENCE_KEY).
pub const REFERENCE_VECTOR: KnownAnswerVector = KnownAnswerVector {
    algorithm: RSASSA_PKCS1V15_SHA256,
    digest: &DIGEST,
    expected_signature: &EXPECTED_SIGNATURE,
};

const DIGEST: [u8; 32] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
    0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18,
    0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20,
];

const EXPECTED_SIGNATURE: [u8; 256] = [
    0x16, 0x98, 0x33, 0xc7, 0x30, 0x2c, 0x0a, 0xdc, 0x0a, 0x8d, 0x02, 0x58,
    0xeb, 0xf9, 0x7d, 0xb6, 0x2a, 0xad, 0xee, 0x63, 0x72, 0xaa, 0x37, 0x2c,
    0xb3, 0x06, 0x04, 0xdf, 0xdb, 0x2b, 0xbc, 0xb1, 0x76, 0x3e, 0xeb, 0x87,
    0xef, 0x91, 0xef, 0x74, 0x69, 0x62, 0x27, 0xf3, 0x24, 0xf8, 0xe7, 0x0e,
    0xb2, 0x15, 0x3f, 0xa2, 0x4d, 0xe2, 0x0c, 0xd4, 0xdc, 0x2d, 0xc1, 0x1a,
    0x84, 0x7c, 0x88, 0x80, 0xb9, 0xa9, 0x23, 0x67, 0x39, 0x2e, 0x86, 0xc0,
    0x53, 0x9b, 0xc1, 0x35, 0xb3, 0x17, 0x5e, 0x62, 0x95, 0xd6, 0xbc, 0x2a,
    0xa6, 0xb1, 0xcf, 0x8f, 0x99, 0x43, 0x1f, 0x3d, 0xd2, 0x70, 0x3f, 0x01,
    0x37, 0x2b, 0xdd, 0x69, 0x1a, 0x5c, 0x2b, 0x04, 0x70, 0x92, 0xea, 0x2d,
    0x86, 0x00, 0xcb, 0x79, 0xca, 0xaf, 0xa4, 0x1c, 0xd9, 0x61, 0x21, 0x3b,
    0x1e, 0xc5, 0x88, 0xfb, 0xff, 0xbd, 0xc7, 0x3c, 0x36, 0xa1, 0xc6, 0x85,
    0x03, 0xaf, 0x47, 0x4f, 0x42, 0x9e, 0x23, 0x65, 0x24, 0x69, 0x17, 0xdb,
    0xe7, 0xb7, 0xdc, 0x51, 0xc6, 0x30, 0x40, 0x32, 0x4f, 0x71, 0xf1, 0x62,
    0x2d, 0xaa, 0x98, 0xdb, 0x11, 0x14, 0xf9, 0x9c, 0x35, 0xc3, 0x16, 0xe1,
    0x1a, 0xd1, 0x8c, 0x4d, 0x8c, 0xad, 0x06, 0x34, 0xd2, 0x84, 0x97, 0xa4,
    0x0b, 0x6e, 0x6d, 0x19, 0x9f, 0xa7, 0x40, 0x1e, 0xb5, 0xfc, 0x4e, 0x12,
    0x08, 0xec, 0xf4, 0x07, 0x13, 0xdc, 0x5a, 0x8c, 0xd5, 0x2a, 0xd6, 0x5a,
    0x2c, 0xc9, 0x54, 0x84, 0x78, 0x34, 0x8f, 0x11, 0xfb, 0x6e, 0xd4, 0x27,
    0x45, 0xd9, 0xfa, 0x90, 0x82, 0x83, 0x73, 0x22, 0x15, 0xab, 0x96, 0x13,
    0x0d, 0x52, 0x1c, 0xdc, 0x17, 0xde, 0x12, 0x6f, 0x84, 0x46, 0xbb, 0xec,
    0xe3, 0xb1, 0xa1, 0x5d, 0x8b, 0xeb, 0xe6, 0xae, 0x02, 0xb8, 0x76, 0x47,
    0x76, 0x11, 0x61, 0x2b,
];
