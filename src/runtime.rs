// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bootstrap and teardown around whatever launched us.  The launcher
//! starts `count` copies of the program and tells each one its rank;
//! this module finds out what we were told and hands back an
//! `Identity`.  It never sends or receives anything.

use std::env;

use error::{Error, Result};
use partition::Identity;

/// Rank and size variables set by common launchers, in the order they
/// are tried: Open MPI, MPICH/Hydra, Slurm.
pub const LAUNCHER_VARS: &[(&str, &str)] = &[
    ("OMPI_COMM_WORLD_RANK", "OMPI_COMM_WORLD_SIZE"),
    ("PMI_RANK", "PMI_SIZE"),
    ("SLURM_PROCID", "SLURM_NTASKS"),
];

/// A collective-computation runtime.  `init` is called once at start,
/// `finalize` once at the end.
pub trait Runtime {
    /// Join the run and learn who we are.
    fn init(&mut self) -> Result<Identity>;

    /// Leave the run.
    fn finalize(&mut self) {}
}

/// Reads the identity the launcher left in the environment.  With no
/// launcher at all we are the only participant.
#[derive(Debug, Default)]
pub struct EnvRuntime;

impl Runtime for EnvRuntime {
    fn init(&mut self) -> Result<Identity> {
        identity_from(|name| env::var(name).ok())
    }
}

/// An identity decided up front, from the command line or a test.
#[derive(Debug)]
pub struct FixedRuntime(pub Identity);

impl Runtime for FixedRuntime {
    fn init(&mut self) -> Result<Identity> {
        Ok(self.0)
    }
}

/// Resolve an identity through `lookup`, which maps a variable name to
/// its value.  The first launcher whose variables are present wins.
pub fn identity_from<F>(lookup: F) -> Result<Identity>
where
    F: Fn(&str) -> Option<String>,
{
    for &(rank_var, size_var) in LAUNCHER_VARS {
        match (lookup(rank_var), lookup(size_var)) {
            (None, None) => continue,
            (Some(rank), Some(count)) => {
                let rank = parse_var(rank_var, &rank)?;
                let count = parse_var(size_var, &count)?;
                return Identity::new(rank, count);
            }
            (Some(_), None) => {
                return Err(Error::Runtime(format!("{} is set without {}", rank_var, size_var)))
            }
            (None, Some(_)) => {
                return Err(Error::Runtime(format!("{} is set without {}", size_var, rank_var)))
            }
        }
    }
    Ok(Identity::solo())
}

fn parse_var(name: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::Runtime(format!("{}={:?} is not a count", name, value)))
}

/// Holds the runtime for the life of the participant.  The runtime is
/// finalized when the session is dropped, error paths included.
pub struct Session<R: Runtime> {
    runtime: R,
    identity: Identity,
}

impl<R: Runtime> Session<R> {
    /// Initialise `runtime` and remember the identity it reports.
    pub fn start(mut runtime: R) -> Result<Session<R>> {
        let identity = runtime.init()?;
        info!(
            "[{}] I am task {} out of {}",
            identity.rank(), identity.rank(), identity.count()
        );
        Ok(Session { runtime, identity })
    }

    /// Who we are.
    pub fn identity(&self) -> Identity {
        self.identity
    }
}

impl<R: Runtime> Drop for Session<R> {
    fn drop(&mut self) {
        debug!("[{}] finalizing", self.identity.rank());
        self.runtime.finalize();
    }
}
