// Redirects the temporary directory of the process, and so is kept apart from other tests.

#[cfg(unix)]
mod solver;

#[cfg(unix)]
mod workspace {

    use std::{os::unix::fs::PermissionsExt, path::Path};

    use super::solver::fake_solver;
    use david_link::{
        config::RunConfig,
        session::Session,
        types::err::{ConfigError, ErrorKind},
    };

    const KNOWLEDGE_BASE: &str = "rule { p(x) => q(x) }\n";
    const PROBLEM: &str = "problem { observe { q(a) } }\n";

    fn set_mode(path: &Path, mode: u32) {
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn no_working_directory_on_config_error() {
        let bin = tempfile::tempdir().unwrap();
        let scratch = tempfile::tempdir().unwrap();
        let record = bin.path().join("workspace");
        let solver = fake_solver(
            bin.path(),
            &format!(
                r#"dirname "$input" > {}; printf '{{}}' > "$out""#,
                record.display()
            ),
        );

        std::env::set_var("TMPDIR", scratch.path());
        let entries = || std::fs::read_dir(scratch.path()).unwrap().count();
        let config = RunConfig::default();

        let mut session = Session::default();
        session.set_knowledge_base(KNOWLEDGE_BASE).unwrap();
        session.set_problem(PROBLEM).unwrap();
        assert_eq!(
            session.run(&config),
            Err(ErrorKind::Config(ConfigError::ExecutableUnset))
        );
        assert_eq!(entries(), 0);

        session.set_executable_path(&solver).unwrap();
        set_mode(&solver, 0o644);
        assert_eq!(
            session.run(&config),
            Err(ErrorKind::Config(ConfigError::NotExecutable(solver.clone())))
        );
        assert_eq!(entries(), 0);
        set_mode(&solver, 0o755);

        let mut session = Session::default();
        session.set_executable_path(&solver).unwrap();
        session.set_problem(PROBLEM).unwrap();
        assert_eq!(
            session.run(&config),
            Err(ErrorKind::Config(ConfigError::KnowledgeBaseUnset))
        );
        assert_eq!(entries(), 0);

        let mut session = Session::default();
        session.set_executable_path(&solver).unwrap();
        session.set_knowledge_base(KNOWLEDGE_BASE).unwrap();
        assert_eq!(
            session.run(&config),
            Err(ErrorKind::Config(ConfigError::ProblemUnset))
        );
        assert_eq!(entries(), 0);

        session.set_problem(PROBLEM).unwrap();
        assert_eq!(
            session.run(&RunConfig::default().with_max_threads(0)),
            Err(ErrorKind::Config(ConfigError::ZeroThreads))
        );
        assert_eq!(entries(), 0);

        // A complete session works in the redirected directory, and leaves nothing behind.
        assert_eq!(session.run(&config), Ok("{}".to_owned()));
        let recorded = std::fs::read_to_string(&record).unwrap();
        assert_eq!(Path::new(recorded.trim()).parent(), Some(scratch.path()));
        assert_eq!(entries(), 0);
    }
}
