//! The files and command line of a solver run.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::config::RunConfig;

/// The name of the input file written for the solver.
pub const INPUT_FILE: &str = "in.dav";

/// The name of the compiled knowledge base written by the solver.
pub const KNOWLEDGE_BASE_FILE: &str = "kb";

/// The name of the output file written by the solver.
pub const OUTPUT_FILE: &str = "output";

pub const KNOWLEDGE_BASE_HEADER: &str = "# Knowledge Base\n";
pub const PROBLEM_HEADER: &str = "# Problem\n";

/// Paths to the files of a run, all within a single working directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workspace {
    pub input: PathBuf,
    pub knowledge_base: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn in_dir(dir: &Path) -> Self {
        Workspace {
            input: dir.join(INPUT_FILE),
            knowledge_base: dir.join(KNOWLEDGE_BASE_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }
}

/// The contents of the input file: the knowledge base section, followed by the problem section.
///
/// A newline is added to a knowledge base without one, so the problem header starts a line of its own.
pub fn input_text(knowledge_base: &str, problem: &str) -> String {
    let mut text = String::with_capacity(
        KNOWLEDGE_BASE_HEADER.len() + knowledge_base.len() + PROBLEM_HEADER.len() + problem.len() + 1,
    );

    text.push_str(KNOWLEDGE_BASE_HEADER);
    text.push_str(knowledge_base);
    if !knowledge_base.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(PROBLEM_HEADER);
    text.push_str(problem);

    text
}

/// The arguments to pass to the solver, in order.
///
/// ```text
/// infer -C -c <generator>,<converter>,<solver> -k <dir>/kb -o mini:<dir>/output [--pseudo-positive] [-P <threads>] [-p] <dir>/in.dav
/// ```
pub fn arguments(config: &RunConfig, workspace: &Workspace) -> Vec<OsString> {
    let mut arguments: Vec<OsString> = vec![
        "infer".into(),
        "-C".into(),
        "-c".into(),
        config.engine_spec().into(),
        "-k".into(),
        workspace.knowledge_base.clone().into(),
        "-o".into(),
    ];

    let mut output = OsString::from("mini:");
    output.push(&workspace.output);
    arguments.push(output);

    if config.pseudo_positive {
        arguments.push("--pseudo-positive".into());
    }

    if let Some(threads) = config.max_threads {
        arguments.push("-P".into());
        arguments.push(threads.to_string().into());
    }

    if config.perturbation {
        arguments.push("-p".into());
    }

    arguments.push(workspace.input.clone().into());

    arguments
}
