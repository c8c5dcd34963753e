use std::path::{Path, PathBuf};

/// Writes an executable shell script named `name` with `body` to `dir`, standing in for the solver.
///
/// The script sets `$out` to the output path and `$input` to the input path before running `body`.
pub fn fake_solver_named(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
for argument in "$@"; do
    case "$previous" in
        -o) out="${{argument#mini:}}" ;;
    esac
    previous="$argument"
    input="$argument"
done
{body}
"#
    );

    let path = dir.join(name);
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[allow(dead_code)]
pub fn fake_solver(dir: &Path, body: &str) -> PathBuf {
    fake_solver_named(dir, "david", body)
}
