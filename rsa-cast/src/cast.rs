/* Copyright (c) Fortanix, Inc.
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::any::Any;
use std::panic;
use std::time::Instant;

use log::{debug, error, info};
use once_cell::sync::OnceCell;

use crate::error::Error;
use crate::fips::{self, Config};

pub type SelfTestFn = fn() -> Result<(), Error>;

#[derive(Clone, Debug)]
pub enum SelfTestOutcome {
    NotRun,
    Passed,
    Failed(Error),
}

impl SelfTestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, SelfTestOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SelfTestOutcome::Failed(_))
    }
}

impl From<&Result<(), Error>> for SelfTestOutcome {
    fn from(result: &Result<(), Error>) -> Self {
        match result {
            Ok(()) => SelfTestOutcome::Passed,
            Err(e) => SelfTestOutcome::Failed(e.clone()),
        }
    }
}

/// A cryptographic algorithm self-test that runs at most once per process.
///
/// The first call to [`run`](Cast::run) executes the test; concurrent
/// callers block until it completes. Every caller, then and later, observes
/// the same result. There is no way to run the test a second time, and a
/// test body that panics is recorded as failed rather than left unrun.
pub struct Cast {
    name: &'static str,
    test: SelfTestFn,
    result: OnceCell<Result<(), Error>>,
}

impl Cast {
    pub const fn new(name: &'static str, test: SelfTestFn) -> Cast {
        Cast {
            name,
            test,
            result: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current state, without triggering the test.
    pub fn outcome(&self) -> SelfTestOutcome {
        match self.result.get() {
            None => SelfTestOutcome::NotRun,
            Some(result) => result.into(),
        }
    }

    /// Registers the test and runs it if it has not run yet, using the
    /// process configuration.
    ///
    /// # Panics
    ///
    /// Panics if the test failed and FIPS 140 enforcement is enabled.
    pub fn run(&'static self) -> Result<(), Error> {
        fips::register(self);
        self.run_with(Config::global())
    }

    /// Like [`run`](Cast::run), with an explicit configuration.
    ///
    /// The configuration's failure injection only takes effect on the call
    /// that actually executes the test.
    pub fn run_with(&self, config: &Config) -> Result<(), Error> {
        let result = self.result.get_or_init(|| self.execute(config));
        if let Err(e) = result {
            if config.enforced() {
                panic!("fips: self-test failed: {}: {}", self.name, e);
            }
        }
        result.clone()
    }

    fn execute(&self, config: &Config) -> Result<(), Error> {
        debug!("running self-test {:?}", self.name);
        let start = Instant::now();
        let mut result = panic::catch_unwind(self.test).unwrap_or_else(|payload| {
            Err(Error::Panicked(panic_message(&*payload)))
        });
        if config.fails(self.name) {
            result = Err(Error::Simulated);
        }
        match result {
            Ok(()) => info!("self-test {:?} passed in {:?}", self.name, start.elapsed()),
            Err(ref e) => error!("self-test {:?} failed: {}", self.name, e),
        }
        result
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
