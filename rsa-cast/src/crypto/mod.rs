/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Interfaces to the RSA primitive exercised by the self-test.
//!
//! The self-test never implements RSA itself. It drives whatever backend
//! implements [`RsaPrivateOps`] and [`RsaPublicOps`]. With the default
//! `crypto-openssl` feature these are implemented for OpenSSL's
//! `Rsa<Private>` and `Rsa<Public>`.

use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "crypto-openssl")]
mod openssl;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Output size of the hash in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw big-endian encodings of an RSA private key with CRT parameters.
#[derive(Clone, Copy)]
pub struct RsaComponents<'a> {
    pub n: &'a [u8],
    pub e: u32,
    pub d: &'a [u8],
    pub p: &'a [u8],
    pub q: &'a [u8],
    pub dp: &'a [u8],
    pub dq: &'a [u8],
    pub qinv: &'a [u8],
}

// Key material stays out of debug output.
impl<'a> fmt::Debug for RsaComponents<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RsaComponents")
            .field("n_len", &self.n.len())
            .field("e", &self.e)
            .finish()
    }
}

pub trait RsaPublicOps {
    type Error: StdError + Send + Sync + 'static;

    /// Size of the modulus in bits.
    fn bits(&self) -> usize;

    /// Big-endian modulus.
    fn n(&self) -> Vec<u8>;

    /// Big-endian public exponent.
    fn e(&self) -> Vec<u8>;

    /// Verifies an RSASSA-PKCS-v1.5 signature over a pre-computed `digest`.
    ///
    /// A signature that does not verify is reported as an error.
    fn verify_pkcs1v1_5(&self, hash: HashAlgorithm, digest: &[u8], sig: &[u8]) -> Result<(), Self::Error>;
}

pub trait RsaPrivateOps: Sized {
    type Error: StdError + Send + Sync + 'static;
    type Public: RsaPublicOps;

    /// Constructs the key from its big-endian components.
    ///
    /// `n`, `p` and `q` must be odd and greater than one, `p` and `q` no
    /// wider than `n`, `d` reduced modulo `n`, `qinv` reduced modulo `p`, and
    /// `e` odd and greater than one. Anything else is rejected before a key
    /// is built.
    fn from_components(components: &RsaComponents) -> Result<Self, Self::Error>;

    fn public_key(&self) -> Result<Self::Public, Self::Error>;

    /// Produces an RSASSA-PKCS-v1.5 signature over a pre-computed `digest`.
    fn sign_pkcs1v1_5(&self, hash: HashAlgorithm, digest: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

#[cfg(feature = "crypto-openssl")]
pub use self::openssl::OpensslRsaError;
