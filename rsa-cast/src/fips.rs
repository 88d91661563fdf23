/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Module-validation glue: where self-tests are registered, and the
//! process configuration that decides what a failure means.
//!
//! Configuration is read once from the environment:
//!
//! * `FIPS140=on` (or `only`) enables enforcement. A failed self-test then
//!   panics in every caller that observes it.
//! * `FIPS140_FAIL_CAST=<name>` forces the named self-test to fail after it
//!   has run, to exercise failure handling.

use std::env;
use std::sync::Mutex;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::cast::{Cast, SelfTestOutcome};
use crate::error::Error;

pub const MODE_VAR: &str = "FIPS140";
pub const FAIL_CAST_VAR: &str = "FIPS140_FAIL_CAST";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether a failed self-test is fatal to the process.
    pub enabled: bool,
    /// Name of a self-test whose result is replaced by a simulated failure.
    pub fail_cast: Option<String>,
}

lazy_static! {
    static ref CONFIG: Config = Config::from_env();
    static ref REGISTRY: Mutex<Vec<&'static Cast>> = Mutex::new(Vec::new());
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_vars(
            env::var(MODE_VAR).ok().as_deref(),
            env::var(FAIL_CAST_VAR).ok().as_deref(),
        )
    }

    fn from_vars(mode: Option<&str>, fail_cast: Option<&str>) -> Config {
        let enabled = match mode.map(str::trim) {
            None | Some("") | Some("off") => false,
            Some("on") | Some("only") => true,
            Some(other) => {
                warn!("ignoring unknown {} value {:?}", MODE_VAR, other);
                false
            }
        };
        let fail_cast = fail_cast
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        Config { enabled, fail_cast }
    }

    /// The configuration read from the environment on first use.
    pub fn global() -> &'static Config {
        &CONFIG
    }

    pub fn enforced(&self) -> bool {
        self.enabled
    }

    pub fn fails(&self, name: &str) -> bool {
        self.fail_cast.as_deref() == Some(name)
    }
}

/// Registers a self-test. A second registration under the same name is
/// ignored.
pub fn register(cast: &'static Cast) {
    let mut registry = REGISTRY.lock().unwrap();
    if registry.iter().any(|c| c.name() == cast.name()) {
        return;
    }
    debug!("registered self-test {:?}", cast.name());
    registry.push(cast);
}

/// Names and current outcomes of all registered self-tests. Does not run
/// anything.
pub fn registered() -> Vec<(&'static str, SelfTestOutcome)> {
    REGISTRY
        .lock()
        .unwrap()
        .iter()
        .map(|c| (c.name(), c.outcome()))
        .collect()
}

/// Runs every registered self-test that has not run yet and returns the
/// first failure, in registration order.
pub fn run_all() -> Result<(), Error> {
    let casts = REGISTRY.lock().unwrap().clone();
    let mut first = Ok(());
    for cast in casts {
        let result = cast.run();
        if first.is_ok() {
            first = result;
        }
    }
    first
}

/// Whether cryptographic operations may proceed: at least one self-test is
/// registered, and every registered self-test has run and passed.
pub fn operational() -> bool {
    let registered = registered();
    !registered.is_empty() && registered.iter().all(|(_, outcome)| outcome.is_passed())
}
