/*!
Running the solver as an external process.

A run is a single blocking call:
1. The session and configuration are checked, before anything touches the filesystem.
2. A fresh working directory is created, and the [input file](command::input_text) written to it.
3. The solver is spawned with the [argument vector](command::arguments) and waited on, for at most the configured timeout.
4. On a zero exit code, the output file is read and returned.

The working directory is a [TempDir](tempfile::TempDir), and so is removed when the run returns, whatever the outcome.
Failed runs are reported, never retried.
*/

use std::process::{Command, Stdio};

use crate::{
    config::RunConfig,
    misc::log::targets::{self},
    session::Session,
    types::err::{ErrorKind, SolverError},
};

pub mod command;
use command::Workspace;

mod wait;

/// The prefix of working directories created for a run.
const WORKSPACE_PREFIX: &str = "david_link.";

/// Runs the solver on the knowledge base and problem of `session`, and returns the text of its output file.
///
/// Errors, in the order they are checked:
/// - A [ConfigError](crate::types::err::ConfigError) if the executable is missing, either text is unset, or the configuration is invalid.
/// - A [SolverError] if the working directory cannot be prepared or the solver cannot be spawned.
/// - [SolverError::Timeout] if the solver runs past the timeout.
/// - [SolverError::Execution] if the solver exits with a non-zero code.
/// - [SolverError::OutputMissing] if the solver exits cleanly without writing its output.
pub fn run(session: &Session, config: &RunConfig) -> Result<String, ErrorKind> {
    let (executable, knowledge_base, problem) = session.ready()?;
    config.validate()?;

    let dir = tempfile::Builder::new()
        .prefix(WORKSPACE_PREFIX)
        .tempdir()
        .map_err(SolverError::io("create a working directory"))?;
    let workspace = Workspace::in_dir(dir.path());

    std::fs::write(&workspace.input, command::input_text(knowledge_base, problem))
        .map_err(SolverError::io("write the solver input"))?;

    let arguments = command::arguments(config, &workspace);
    log::info!(target: targets::INVOKE, "Running {} {arguments:?}", executable.display());

    let child = Command::new(executable)
        .args(&arguments)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(SolverError::io("spawn the solver"))?;

    let captured = wait::wait_with_output(child, config.timeout)?;

    if !captured.status.success() {
        log::error!(target: targets::INVOKE, "Solver failed with {}", captured.status);
        return Err(SolverError::Execution {
            code: captured.status.code(),
            stdout: captured.stdout,
            stderr: captured.stderr,
        }
        .into());
    }

    log::debug!(target: targets::INVOKE, "Solver stderr: {}", captured.stderr);

    match std::fs::read_to_string(&workspace.output) {
        Ok(output) => {
            log::info!(target: targets::INVOKE, "Read {} bytes of solver output", output.len());
            Ok(output)
        }

        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::error!(target: targets::INVOKE, "Solver exited cleanly without output");
            Err(SolverError::OutputMissing(workspace.output).into())
        }

        Err(e) => Err(SolverError::io("read the solver output")(e).into()),
    }
}
