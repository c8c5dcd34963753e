use clap::Parser;
use david_link::{proof::build_proof_graph, session::Session, types::err::ErrorKind};

mod args;
use args::Args;

/// Exit codes of the binary.
mod exit {
    pub const CONFIG: i32 = 1;
    pub const SOLVER: i32 = 2;
    pub const PARSE: i32 = 3;
}

fn exit_with(e: ErrorKind) -> ! {
    eprintln!("c {e}");
    if let ErrorKind::Solver(david_link::types::err::SolverError::Execution { stderr, .. }) = &e {
        for line in stderr.lines() {
            eprintln!("c | {line}");
        }
    }

    let code = match e {
        ErrorKind::Config(_) | ErrorKind::Input(_) => exit::CONFIG,
        ErrorKind::Solver(_) => exit::SOLVER,
        ErrorKind::Parse(_) => exit::PARSE,
    };
    std::process::exit(code);
}

/// Diagnostics are `c ` lines on stderr, so stdout holds only the solver output or the rendered graph.
fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut session = Session::default();

    if let Err(e) = session.set_executable_path(&args.david) {
        exit_with(e.into());
    }

    eprintln!("c Reading knowledge base from {:?}", args.knowledge_base);
    if let Err(e) = session.load_knowledge_base(&args.knowledge_base) {
        exit_with(e.into());
    }

    if let Err(e) = session.set_problem_from_atoms(&args.observations, &args.required) {
        exit_with(e);
    }

    let config = args.run_config();
    eprintln!(
        "c Observations: {}, required: {}, engine: {}",
        args.observations.len(),
        args.required.len(),
        config.engine_spec()
    );

    let output = match session.run(&config) {
        Ok(output) => output,
        Err(e) => exit_with(e),
    };

    if args.raw {
        println!("{output}");
        return;
    }

    let graph = match build_proof_graph(&output) {
        Ok(graph) => graph,
        Err(e) => exit_with(e.into()),
    };

    if graph.is_empty() {
        eprintln!("c No solution found");
    } else {
        eprintln!(
            "c Proof graph: {} vertices, {} hyperarcs",
            graph.vertex_count(),
            graph.hyperarc_count()
        );
    }

    println!("{}", graph.render());
}
