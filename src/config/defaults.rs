//! Defaults of a [RunConfig](super::RunConfig).
//!
//! The default generator, converter, and solver are the `#[default]` variants of their enums, shared with the command line.

use std::time::Duration;

pub const PSEUDO_POSITIVE: bool = true;
pub const PERTURBATION: bool = true;

/// How often a running solver is checked for completion, when a timeout is given.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);
