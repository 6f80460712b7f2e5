//! Prefix-based completion over registered command names.

/// Outcome of one autocomplete pass over the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No registered name starts with the input. The input is left unchanged.
    NoMatch,
    /// Exactly one name matches; the input is replaced with it in full.
    Exact(String),
    /// Several names match. The input becomes the longest common prefix and
    /// the matches are listed in the output log, in registry scan order.
    Partial {
        /// Longest common prefix of all matches. May be empty.
        prefix: String,
        /// All matching names, registry insertion order.
        matches: Vec<String>,
    },
}

/// Computes the completion outcome for `input` against `names`.
pub fn complete(names: &[&str], input: &str) -> Completion {
    let needle = input.to_lowercase();
    let matches: Vec<String> = names
        .iter()
        .filter(|name| name.starts_with(&needle))
        .map(|name| name.to_string())
        .collect();

    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Exact(matches.into_iter().next().unwrap_or_default()),
        _ => {
            let refs: Vec<&str> = matches.iter().map(String::as_str).collect();
            Completion::Partial {
                prefix: longest_common_prefix(&refs),
                matches,
            }
        }
    }
}

/// Longest common prefix of all strings, shrinking the first candidate from
/// the right until every string starts with it. Empty when they diverge at
/// the first character.
pub fn longest_common_prefix(strings: &[&str]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut prefix = (*first).to_string();
    while !strings.iter().all(|s| s.starts_with(&prefix)) {
        prefix.pop();
    }
    prefix
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_match_completes_in_full() {
        assert_eq!(
            complete(&["help"], "h"),
            Completion::Exact("help".to_string())
        );
    }

    #[test]
    fn diverging_matches_keep_only_the_typed_letter() {
        let outcome = complete(&["echo", "education", "experience"], "e");
        let Completion::Partial { prefix, matches } = outcome else {
            panic!("expected partial completion");
        };
        assert_eq!(prefix, "e");
        assert_eq!(matches, ["echo", "education", "experience"]);
    }

    #[test]
    fn shared_stem_extends_the_prefix() {
        let outcome = complete(&["experience", "export"], "ex");
        let Completion::Partial { prefix, .. } = outcome else {
            panic!("expected partial completion");
        };
        assert_eq!(prefix, "exp");
    }

    #[test]
    fn no_match_leaves_input_alone() {
        assert_eq!(complete(&["help", "ls"], "z"), Completion::NoMatch);
    }

    #[test]
    fn completion_lowercases_the_input() {
        assert_eq!(
            complete(&["help"], "HE"),
            Completion::Exact("help".to_string())
        );
    }

    #[test]
    fn lcp_of_disjoint_strings_is_empty() {
        assert_eq!(longest_common_prefix(&["cat", "ls"]), "");
        assert_eq!(longest_common_prefix(&[]), "");
    }
}
