/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::cmp::Ordering;
use std::error::Error as StdError;
use std::fmt;

use ::openssl::bn::{BigNum, BigNumRef};
use ::openssl::error::ErrorStack;
use ::openssl::md::{Md, MdRef};
use ::openssl::pkey::{PKey, Private, Public};
use ::openssl::pkey_ctx::PkeyCtx;
use ::openssl::rsa::{Padding, Rsa, RsaRef};

use super::{HashAlgorithm, RsaComponents, RsaPrivateOps, RsaPublicOps};

/// Errors from the OpenSSL RSA backend.
#[derive(Debug)]
pub enum OpensslRsaError {
    /// The digest does not have the output size of the named hash.
    Length { hash: HashAlgorithm, len: usize },
    /// A key component is outside the range its role requires.
    Component { component: &'static str, reason: &'static str },
    /// The signature did not verify.
    BadSignature,
    OpenSsl(ErrorStack),
}

impl fmt::Display for OpensslRsaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpensslRsaError::Length { hash, len } => write!(
                f,
                "digest length {} does not match {} output size {}",
                len,
                hash,
                hash.digest_len()
            ),
            OpensslRsaError::Component { component, reason } => write!(f, "{}: {}", component, reason),
            OpensslRsaError::BadSignature => f.write_str("signature verification failed"),
            OpensslRsaError::OpenSsl(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for OpensslRsaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            OpensslRsaError::OpenSsl(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ErrorStack> for OpensslRsaError {
    fn from(e: ErrorStack) -> Self {
        OpensslRsaError::OpenSsl(e)
    }
}

fn md(hash: HashAlgorithm) -> &'static MdRef {
    match hash {
        HashAlgorithm::Sha256 => Md::sha256(),
        HashAlgorithm::Sha384 => Md::sha384(),
        HashAlgorithm::Sha512 => Md::sha512(),
    }
}

fn invalid(component: &'static str, reason: &'static str) -> OpensslRsaError {
    OpensslRsaError::Component { component, reason }
}

/// Parses `bytes` as a modulus: odd and greater than one.
fn modulus(component: &'static str, bytes: &[u8]) -> Result<BigNum, OpensslRsaError> {
    let m = BigNum::from_slice(bytes)?;
    if m.num_bits() <= 1 {
        return Err(invalid(component, "modulus must be greater than one"));
    }
    if !m.is_bit_set(0) {
        return Err(invalid(component, "modulus must be odd"));
    }
    Ok(m)
}

/// Parses `bytes` as a residue, which must already be reduced modulo `m`.
fn residue(component: &'static str, bytes: &[u8], m: &BigNumRef) -> Result<BigNum, OpensslRsaError> {
    let v = BigNum::from_slice(bytes)?;
    if v.ucmp(m) != Ordering::Less {
        return Err(invalid(component, "value is not reduced"));
    }
    Ok(v)
}

fn verify_result(verified: Result<bool, ErrorStack>) -> Result<(), OpensslRsaError> {
    match verified {
        Ok(true) => Ok(()),
        Ok(false) => Err(OpensslRsaError::BadSignature),
        Err(e) => Err(OpensslRsaError::OpenSsl(e)),
    }
}

fn check_digest(hash: HashAlgorithm, digest: &[u8]) -> Result<(), OpensslRsaError> {
    if digest.len() != hash.digest_len() {
        return Err(OpensslRsaError::Length {
            hash,
            len: digest.len(),
        });
    }
    Ok(())
}

impl RsaPrivateOps for Rsa<Private> {
    type Error = OpensslRsaError;
    type Public = Rsa<Public>;

    fn from_components(c: &RsaComponents) -> Result<Self, Self::Error> {
        let n = modulus("modulus", c.n)?;
        let d = residue("private exponent", c.d, &n)?;
        let p = modulus("prime p", c.p)?;
        let q = modulus("prime q", c.q)?;
        if p.num_bits() > n.num_bits() {
            return Err(invalid("prime p", "wider than the modulus"));
        }
        if q.num_bits() > n.num_bits() {
            return Err(invalid("prime q", "wider than the modulus"));
        }
        let qinv = residue("CRT coefficient", c.qinv, &p)?;
        if c.e <= 1 || c.e & 1 == 0 {
            return Err(invalid("public exponent", "must be odd and greater than one"));
        }
        let key = Rsa::from_private_components(
            n,
            BigNum::from_u32(c.e)?,
            d,
            p,
            q,
            BigNum::from_slice(c.dp)?,
            BigNum::from_slice(c.dq)?,
            qinv,
        )?;
        Ok(key)
    }

    fn public_key(&self) -> Result<Self::Public, Self::Error> {
        let key: &RsaRef<Private> = self;
        let public = Rsa::from_public_components(key.n().to_owned()?, key.e().to_owned()?)?;
        Ok(public)
    }

    fn sign_pkcs1v1_5(&self, hash: HashAlgorithm, digest: &[u8]) -> Result<Vec<u8>, Self::Error> {
        check_digest(hash, digest)?;
        let pkey = PKey::from_rsa(self.clone())?;
        let mut ctx = PkeyCtx::new(&pkey)?;
        ctx.sign_init()?;
        ctx.set_rsa_padding(Padding::PKCS1)?;
        ctx.set_signature_md(md(hash))?;
        let mut sig = Vec::with_capacity(self.size() as usize);
        ctx.sign_to_vec(digest, &mut sig)?;
        Ok(sig)
    }
}

impl RsaPublicOps for Rsa<Public> {
    type Error = OpensslRsaError;

    fn bits(&self) -> usize {
        let key: &RsaRef<Public> = self;
        key.n().num_bits() as usize
    }

    fn n(&self) -> Vec<u8> {
        let key: &RsaRef<Public> = self;
        key.n().to_vec()
    }

    fn e(&self) -> Vec<u8> {
        let key: &RsaRef<Public> = self;
        key.e().to_vec()
    }

    fn verify_pkcs1v1_5(&self, hash: HashAlgorithm, digest: &[u8], sig: &[u8]) -> Result<(), Self::Error> {
        check_digest(hash, digest)?;
        let pkey = PKey::from_rsa(self.clone())?;
        let mut ctx = PkeyCtx::new(&pkey)?;
        ctx.verify_init()?;
        ctx.set_rsa_padding(Padding::PKCS1)?;
        ctx.set_signature_md(md(hash))?;
        verify_result(ctx.verify(digest, sig))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_keeps_error_stack() {
        verify_result(Ok(true)).unwrap();
        assert!(matches!(verify_result(Ok(false)), Err(OpensslRsaError::BadSignature)));

        let err = verify_result(Err(ErrorStack::get())).unwrap_err();
        assert!(matches!(err, OpensslRsaError::OpenSsl(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn component_ranges() {
        let three = BigNum::from_u32(3).unwrap();
        modulus("m", &[0x03]).unwrap();
        assert!(modulus("m", &[]).is_err());
        assert!(modulus("m", &[0x00, 0x01]).is_err());
        assert!(modulus("m", &[0x01, 0x00]).is_err());
        residue("r", &[0x00, 0x02], &three).unwrap();
        assert!(residue("r", &[0x03], &three).is_err());
        assert!(residue("r", &[0x01, 0x00], &three).is_err());
    }
}
