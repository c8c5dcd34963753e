#[cfg(unix)]
mod solver;

#[cfg(unix)]
mod cli {

    use std::{path::Path, process::Command};

    use super::solver::fake_solver;

    fn david_link(solver: &Path, knowledge_base: &Path) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_david_link"));
        command
            .arg("--david")
            .arg(solver)
            .arg("--knowledge-base")
            .arg(knowledge_base)
            .args(["--observe", "vote(3,2)"]);
        command
    }

    fn knowledge_base(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("kb.dav");
        std::fs::write(&path, "rule { werewolf(x) => vote(x, y) }\n").unwrap();
        path
    }

    #[test]
    fn raw_output_is_only_json() {
        let dir = tempfile::tempdir().unwrap();
        let solver = fake_solver(dir.path(), r#"printf '{"results":[]}' > "$out""#);
        let kb = knowledge_base(dir.path());

        let output = david_link(&solver, &kb).arg("--raw").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json, serde_json::json!({ "results": [] }));

        let diagnostics = String::from_utf8_lossy(&output.stderr);
        assert!(diagnostics.contains("c Observations: 1"));
    }

    #[test]
    fn graph_output_is_only_dot() {
        let dir = tempfile::tempdir().unwrap();
        let payload = r#"{"results":[{"solution":{"nodes":[{"index":1,"atom":"vote(3,2)"},{"index":2,"atom":"werewolf(3)"}],"hypernodes":[{"index":10,"nodes":[2]},{"index":20,"nodes":[1]}],"edges":[{"index":3,"head":10,"tail":20}]}}]}"#;
        let solver = fake_solver(dir.path(), &format!("printf '%s' '{payload}' > \"$out\""));
        let kb = knowledge_base(dir.path());

        let output = david_link(&solver, &kb).output().unwrap();
        assert!(output.status.success());

        let dot = String::from_utf8_lossy(&output.stdout);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(String::from_utf8_lossy(&output.stderr).contains("c Proof graph: 2 vertices, 1 hyperarcs"));
    }

    #[test]
    fn errors_leave_stdout_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kb = knowledge_base(dir.path());

        let output = david_link(&dir.path().join("missing"), &kb).output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("c "));
    }
}
