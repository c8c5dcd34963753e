//! Error types used in the library.
//!
//! - Configuration and input errors are always raised before a solver process is spawned, and so before any temporary files are created.
//! - Solver errors describe a run which was attempted and failed --- a timeout, a non-zero exit, or a missing output file.
//! - Parse errors are limited to payloads which are not JSON at all, or whose fields have the wrong types.
//!   A payload without a solution is *not* an error, and results in an empty graph.
//!
//! Nothing is retried internally, each error is returned to the caller as is.
//!
//! Each error enum is named for the concern it reports on, and converts into [ErrorKind] with `?`.

use std::{path::PathBuf, time::Duration};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Input(InputError),
    Parse(ParseError),
    Solver(SolverError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Input(e) => write!(f, "Input error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Solver(e) => write!(f, "Solver error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors in the configuration of a session or a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// No path to a solver executable has been set.
    ExecutableUnset,

    /// The path does not lead to an executable file.
    NotExecutable(PathBuf),

    /// An attempt to set an empty knowledge base.
    EmptyKnowledgeBase,

    /// A run was requested before a knowledge base was set.
    KnowledgeBaseUnset,

    /// A knowledge base file could not be read.
    UnreadableKnowledgeBase(PathBuf),

    /// An attempt to set an empty problem.
    EmptyProblem,

    /// A run was requested before a problem was set.
    ProblemUnset,

    /// Some string which does not name a supported LHS generator.
    UnknownGenerator(String),

    /// Some string which does not name a supported ILP converter.
    UnknownConverter(String),

    /// Some string which does not name a supported ILP solver.
    UnknownSolver(String),

    /// A thread limit of zero.
    ZeroThreads,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableUnset => write!(f, "no path to a solver executable has been set"),
            Self::NotExecutable(path) => write!(f, "no executable file found: {}", path.display()),
            Self::EmptyKnowledgeBase => write!(f, "empty knowledge base"),
            Self::KnowledgeBaseUnset => write!(f, "the knowledge base is not yet set"),
            Self::UnreadableKnowledgeBase(path) => {
                write!(f, "failed to read a knowledge base from {}", path.display())
            }
            Self::EmptyProblem => write!(f, "empty problem"),
            Self::ProblemUnset => write!(f, "the problem is not yet set"),
            Self::UnknownGenerator(s) => write!(f, "invalid LHS generator: '{s}'"),
            Self::UnknownConverter(s) => write!(f, "invalid ILP converter: '{s}'"),
            Self::UnknownSolver(s) => write!(f, "invalid ILP solver: '{s}'"),
            Self::ZeroThreads => write!(f, "the maximum number of threads must be at least one"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors in arguments given to the problem serializer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputError {
    /// A problem must observe at least one atom.
    NoObservation,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoObservation => write!(f, "no observation given"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::Input(e)
    }
}

/// Errors when decoding a solver payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The payload is not well-formed JSON, or some field has an unexpected type.
    Payload {
        line: usize,
        column: usize,
        message: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Payload {
                line,
                column,
                message,
            } => write!(f, "malformed payload at {line}:{column}: {message}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Payload {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during a run of the solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// The solver did not finish within the given time.
    /// The process was killed and any partial output discarded.
    Timeout(Duration),

    /// The solver exited with a non-zero code, or was terminated by a signal (in which case there is no code).
    Execution {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The solver exited successfully, but the output file is missing.
    OutputMissing(PathBuf),

    /// Some failure of the filesystem or the process machinery.
    Io {
        action: &'static str,
        kind: std::io::ErrorKind,
    },
}

impl SolverError {
    /// A closure to tag an [std::io::Error] with the action which raised it.
    pub(crate) fn io(action: &'static str) -> impl Fn(std::io::Error) -> SolverError {
        move |e| SolverError::Io {
            action,
            kind: e.kind(),
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(limit) => write!(f, "the solver exceeded its time limit of {limit:?}"),
            Self::Execution { code, stderr, .. } => match code {
                Some(code) => write!(f, "the solver exited with code {code}: {}", stderr.trim()),
                None => write!(f, "the solver was terminated by a signal: {}", stderr.trim()),
            },
            Self::OutputMissing(path) => {
                write!(f, "the solver succeeded but wrote no output to {}", path.display())
            }
            Self::Io { action, kind } => write!(f, "failed to {action}: {kind}"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}
