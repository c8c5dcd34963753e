/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made at the boundaries of a session, a solver run, and the construction of a proof graph.
These are intended to help diagnose issues with a solver installation or its output.

Note, no log implementation is provided by the library.
The `david_link` binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [session](crate::session)
    pub const SESSION: &str = "session";

    /// Logs related to [running the solver](crate::invoke)
    pub const INVOKE: &str = "invoke";

    /// Logs related to [proof graph construction](crate::proof)
    pub const PROOF_GRAPH: &str = "proof_graph";
}
