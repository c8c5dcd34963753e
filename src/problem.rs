/*!
Serialization of a problem to the input format of the solver.

A problem is a conjunction of observed atoms, and optionally a conjunction of atoms any solution hypothesis must contain.
Atoms are opaque strings, and are written as given.

```rust
# use david_link::problem::serialize_problem;
let block = serialize_problem(&["p(x)", "q(x)"], &["r(x)"]).unwrap();

assert_eq!(
    block,
    "problem {\n    observe { p(x) ^ q(x) }\n    require { r(x) }\n}\n"
);
```
*/

use std::fmt::Write;

use crate::types::err::InputError;

/// The conjunction symbol of the solver.
const CONJUNCTION: &str = " ^ ";

/// Writes a problem block observing `observations` and requiring `required`.
///
/// The require line is omitted when `required` is empty.
/// Returns an [InputError] if there are no observations.
pub fn serialize_problem<O: AsRef<str>, R: AsRef<str>>(
    observations: &[O],
    required: &[R],
) -> Result<String, InputError> {
    if observations.is_empty() {
        return Err(InputError::NoObservation);
    }

    let mut block = String::from("problem {\n");
    let _ = writeln!(block, "    observe {{ {} }}", conjoin(observations));
    if !required.is_empty() {
        let _ = writeln!(block, "    require {{ {} }}", conjoin(required));
    }
    block.push_str("}\n");

    Ok(block)
}

fn conjoin<S: AsRef<str>>(atoms: &[S]) -> String {
    atoms
        .iter()
        .map(|atom| atom.as_ref())
        .collect::<Vec<_>>()
        .join(CONJUNCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn observation_only() {
        let block = serialize_problem(&["say_seer(4, 4)"], NONE).unwrap();
        assert_eq!(block, "problem {\n    observe { say_seer(4, 4) }\n}\n");
        assert!(!block.contains("require"));
    }

    #[test]
    fn order_is_kept() {
        let observations = vec!["vote(3,2)".to_owned(), "say_seer(1,1)".to_owned(), "vote(5,4)".to_owned()];
        let block = serialize_problem(&observations, NONE).unwrap();
        assert!(block.contains("observe { vote(3,2) ^ say_seer(1,1) ^ vote(5,4) }"));
        assert_eq!(block.matches("observe {").count(), 1);
    }

    #[test]
    fn required_atoms() {
        let block = serialize_problem(&["a", "b"], &["c", "d"]).unwrap();
        assert_eq!(
            block,
            "problem {\n    observe { a ^ b }\n    require { c ^ d }\n}\n"
        );
    }

    #[test]
    fn no_observations() {
        assert_eq!(
            serialize_problem(NONE, &["c"]),
            Err(InputError::NoObservation)
        );
    }

    #[test]
    fn deterministic() {
        let first = serialize_problem(&["a"], &["b"]);
        let second = serialize_problem(&["a"], &["b"]);
        assert_eq!(first, second);
    }
}
