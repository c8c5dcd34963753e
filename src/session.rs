/*!
A session with the solver.

A session holds the three things a run needs:
- A path to the solver executable.
- A knowledge base.
- A problem, typically from [serialize_problem].

Each is set independently, and setting one never clears another.
So, a knowledge base may be set once and used with any number of problems.

Setters require a mutable borrow and runs a shared borrow, so a session cannot be changed while a run is in progress.
Distinct sessions share nothing, and runs from distinct sessions use distinct working directories.

```rust,no_run
# use david_link::{config::RunConfig, session::Session};
let mut session = Session::default();
session.set_executable_path("/usr/local/bin/david")?;
session.load_knowledge_base("kb.dav")?;
session.set_problem_from_atoms(&["say_seer(4, 4)", "vote(3,2)"], &["seer(3)"])?;

let graph = session.solve(&RunConfig::default())?;
println!("{}", graph.render());
# Ok::<(), david_link::types::err::ErrorKind>(())
```
*/

use std::path::{Path, PathBuf};

use crate::{
    config::RunConfig,
    invoke,
    misc::log::targets::{self},
    problem::serialize_problem,
    proof::{build_proof_graph, ProofGraph},
    types::err::{ConfigError, ErrorKind},
};

/// The configuration shared by runs of the solver.
#[derive(Clone, Debug, Default)]
pub struct Session {
    executable_path: Option<PathBuf>,
    knowledge_base: Option<String>,
    problem: Option<String>,
}

impl Session {
    /// Sets the path to the solver executable.
    ///
    /// The path is checked immediately, and an error returned if it does not lead to an executable file.
    ///
    /// A relative path is resolved against the current directory and stored as an absolute path.
    /// So, the file checked is the file run, and a bare name is never looked up on `PATH`.
    pub fn set_executable_path(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if !is_executable(path) {
            return Err(ConfigError::NotExecutable(path.to_path_buf()));
        }

        let absolute =
            std::path::absolute(path).map_err(|_| ConfigError::NotExecutable(path.to_path_buf()))?;

        log::info!(target: targets::SESSION, "Executable set to {}", absolute.display());
        self.executable_path = Some(absolute);
        Ok(())
    }

    /// Sets the knowledge base, which must be non-empty.
    pub fn set_knowledge_base(&mut self, text: impl Into<String>) -> Result<(), ConfigError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ConfigError::EmptyKnowledgeBase);
        }

        log::info!(target: targets::SESSION, "Knowledge base set ({} bytes)", text.len());
        self.knowledge_base = Some(text);
        Ok(())
    }

    /// Reads a knowledge base from the file at `path` and sets it.
    pub fn load_knowledge_base(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::UnreadableKnowledgeBase(path.to_path_buf()))?;
        self.set_knowledge_base(text)
    }

    /// Sets the problem, which must be non-empty.
    ///
    /// The text is not checked against the grammar of the solver.
    pub fn set_problem(&mut self, text: impl Into<String>) -> Result<(), ConfigError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ConfigError::EmptyProblem);
        }

        log::info!(target: targets::SESSION, "Problem set ({} bytes)", text.len());
        self.problem = Some(text);
        Ok(())
    }

    /// Serializes a problem from `observations` and `required` atoms and sets it.
    pub fn set_problem_from_atoms<O: AsRef<str>, R: AsRef<str>>(
        &mut self,
        observations: &[O],
        required: &[R],
    ) -> Result<(), ErrorKind> {
        let block = serialize_problem(observations, required)?;
        self.set_problem(block)?;
        Ok(())
    }

    pub fn executable_path(&self) -> Option<&Path> {
        self.executable_path.as_deref()
    }

    pub fn knowledge_base(&self) -> Option<&str> {
        self.knowledge_base.as_deref()
    }

    pub fn problem(&self) -> Option<&str> {
        self.problem.as_deref()
    }

    /// Checks the session is ready for a run, in order:
    /// the executable is (still) executable, the knowledge base is set, the problem is set.
    ///
    /// On success, returns the three values.
    pub fn ready(&self) -> Result<(&Path, &str, &str), ConfigError> {
        let executable = self
            .executable_path
            .as_deref()
            .ok_or(ConfigError::ExecutableUnset)?;
        if !is_executable(executable) {
            return Err(ConfigError::NotExecutable(executable.to_path_buf()));
        }

        let knowledge_base = self
            .knowledge_base
            .as_deref()
            .ok_or(ConfigError::KnowledgeBaseUnset)?;

        let problem = self.problem.as_deref().ok_or(ConfigError::ProblemUnset)?;

        Ok((executable, knowledge_base, problem))
    }

    /// Runs the solver on the knowledge base and problem of the session, and returns the text of its output.
    ///
    /// See [invoke::run] for details.
    pub fn run(&self, config: &RunConfig) -> Result<String, ErrorKind> {
        invoke::run(self, config)
    }

    /// Runs the solver and builds a proof graph from the first solution it reports.
    pub fn solve(&self, config: &RunConfig) -> Result<ProofGraph, ErrorKind> {
        let output = self.run(config)?;
        Ok(build_proof_graph(&output)?)
    }
}

/// Whether `path` is a file with some execute permission.
#[cfg(unix)]
pub(crate) fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Whether `path` is a file.
#[cfg(not(unix))]
pub(crate) fn is_executable(path: &Path) -> bool {
    path.is_file()
}
