/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Backend error, type-erased so that a self-test outcome can be handed to
/// every observer.
pub type BackendError = Arc<dyn StdError + Send + Sync + 'static>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Sign,
    Verify,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Sign => f.write_str("sign"),
            Operation::Verify => f.write_str("verify"),
        }
    }
}

/// Reasons a self-test fails. Every variant is fatal.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid {component} in fixed key material: {reason}")]
    Construction {
        component: &'static str,
        reason: String,
    },
    #[error("{operation} primitive failed: {source}")]
    Primitive {
        operation: Operation,
        #[source]
        source: BackendError,
    },
    #[error("unexpected result")]
    ResultMismatch,
    #[error("simulated CAST failure")]
    Simulated,
    #[error("self-test panicked: {0}")]
    Panicked(String),
}

impl Error {
    pub fn construction<S: Into<String>>(component: &'static str, reason: S) -> Self {
        Error::Construction {
            component,
            reason: reason.into(),
        }
    }

    pub fn sign<E: StdError + Send + Sync + 'static>(source: E) -> Self {
        Error::Primitive {
            operation: Operation::Sign,
            source: Arc::new(source),
        }
    }

    pub fn verify<E: StdError + Send + Sync + 'static>(source: E) -> Self {
        Error::Primitive {
            operation: Operation::Verify,
            source: Arc::new(source),
        }
    }

    pub fn is_construction(&self) -> bool {
        matches!(self, Error::Construction { .. })
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Error::Primitive { .. })
    }

    pub fn is_result_mismatch(&self) -> bool {
        matches!(self, Error::ResultMismatch)
    }

    pub fn is_panicked(&self) -> bool {
        matches!(self, Error::Panicked(_))
    }
}
