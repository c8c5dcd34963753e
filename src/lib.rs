//! A library for running the [Open-David](https://github.com/aurtg/open-david) abductive reasoner and reconstructing its proof graphs.
//!
//! Open-David explains a set of observations by searching for the least-cost hypothesis from which the observations follow, given some knowledge base.
//! The solver itself is an external executable, and david_link is the layer between Rust and that executable:
//! - A problem is [serialized](crate::problem) from lists of atoms.
//! - A [session](crate::session) holds the executable, knowledge base, and problem.
//! - The solver is [invoked](crate::invoke) with some [configuration](crate::config), and its output returned as text.
//! - A [proof graph](crate::proof) is built from the output.
//!
//! Atoms are opaque strings throughout, and no attempt is made to check them.
//!
//! # Orientation
//!
//! The high-level flow is:
//!
//! ```text
//! atoms ─▶ problem block ─▶ session ─▶ solver run ─▶ payload text ─▶ proof graph
//! ```
//!
//! Each arrow is a separate step, so, for example, a knowledge base may be set once and reused with a sequence of problems, and a saved payload may be turned into a graph without running the solver.
//!
//! # Examples
//!
//! + Build a proof graph from a solver payload.
//!
//! ```rust
//! # use david_link::proof::build_proof_graph;
//! let payload = r#"{"results": [{"solution": {
//!     "nodes": [{"index": 1, "atom": "a"}],
//!     "hypernodes": [{"index": 10, "nodes": [1]}],
//!     "edges": []
//! }}]}"#;
//!
//! let graph = build_proof_graph(payload).unwrap();
//! assert_eq!(graph.vertex_count(), 1);
//! assert_eq!(graph.label(1), Some("a"));
//! assert_eq!(graph.hyperarc_count(), 0);
//! ```
//!
//! + Run the solver.
//!
//! ```rust,no_run
//! # use david_link::{config::RunConfig, session::Session};
//! # use std::time::Duration;
//! let mut session = Session::default();
//! session.set_executable_path("/usr/local/bin/david")?;
//! session.set_knowledge_base(std::fs::read_to_string("kb.dav").unwrap())?;
//! session.set_problem_from_atoms(&["say_seer(4, 4)", "vote(3,2)"], &[] as &[&str])?;
//!
//! let config = RunConfig::default().with_timeout(Duration::from_secs(60));
//! let payload = session.run(&config)?;
//! # Ok::<(), david_link::types::err::ErrorKind>(())
//! ```
//!
//! # Errors
//!
//! Errors are collected in [types::err].
//! Configuration is checked before the solver is spawned, and a payload without a solution is an empty graph, rather than an error.
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of the command line passed to the solver can be found with `RUST_LOG=invoke …`
//! - Logs of edges skipped when building a graph can be found with `RUST_LOG=proof_graph=debug …`

pub mod config;
pub mod invoke;
pub mod problem;
pub mod proof;
pub mod session;
pub mod types;

pub mod misc;
