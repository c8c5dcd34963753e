// Changes the current directory, and so is kept apart from other tests.

#[cfg(unix)]
mod solver;

#[cfg(unix)]
mod executable_path {

    use super::solver::fake_solver_named;
    use david_link::{config::RunConfig, session::Session};

    #[test]
    fn bare_name_runs_the_checked_file() {
        let dir = tempfile::tempdir().unwrap();
        fake_solver_named(
            dir.path(),
            "david_link_solver",
            r#"printf '{"results":[]}' > "$out""#,
        );
        std::env::set_current_dir(dir.path()).unwrap();

        let mut session = Session::default();
        session.set_executable_path("david_link_solver").unwrap();

        let stored = session.executable_path().unwrap();
        assert!(stored.is_absolute());
        assert_eq!(
            stored.canonicalize().unwrap(),
            dir.path().join("david_link_solver").canonicalize().unwrap()
        );

        session
            .set_knowledge_base("rule { p(x) => q(x) }\n")
            .unwrap();
        session.set_problem_from_atoms(&["q(a)"], &[] as &[&str]).unwrap();

        assert_eq!(
            session.run(&RunConfig::default()),
            Ok(r#"{"results":[]}"#.to_owned())
        );
    }
}
