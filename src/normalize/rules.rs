//! Message Classification Rules
//!
//! Curated substring rules that decide whether a checker message is shown
//! as a warning or an error, optionally rewriting the message, plus the
//! suppression list for messages known to be checker false positives.

use crate::normalize::engine::Severity;

/// A single message-matching rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Affects severity only when the substring is found
    Match(&'static str),
    /// Also replaces the whole message when the substring is found
    Replace(&'static str, &'static str),
}

impl Rule {
    fn pattern(&self) -> &'static str {
        match self {
            Rule::Match(find) => find,
            Rule::Replace(find, _) => find,
        }
    }

    fn replacement(&self) -> Option<&'static str> {
        match self {
            Rule::Match(_) => None,
            Rule::Replace(_, replace) => Some(replace),
        }
    }
}

/// Rules applied first, with the force flag: every rule sets Warning
/// whether or not its substring matches, so any message the error pass
/// leaves untouched ends up a warning.
pub const WARNING_RULES: &[Rule] = &[Rule::Replace(
    "Expected '{'",
    "Statement body should be inside '{ }' braces.",
)];

/// Rules applied second; severity changes only on an actual match.
pub const ERROR_RULES: &[Rule] = &[
    Rule::Match("Missing semicolon"),
    Rule::Match("Extra comma"),
    Rule::Match("Missing property name"),
    Rule::Match("Unmatched "),
    Rule::Match(" and instead saw"),
    Rule::Match(" is not defined"),
    Rule::Match("Unclosed string"),
    Rule::Match("Stopping, unable to continue"),
];

/// Messages known to be checker false positives; a diagnostic containing
/// one of these is suppressed outright.
pub const NOISE: &[&str] = &["Dangerous comment"];

/// Classify a raw checker message into its final severity and text.
///
/// The warning pass runs first and unconditionally; the error pass runs
/// second and only fires on a substring match against the possibly
/// already-rewritten message. Within a pass, the last matching rule's
/// replacement wins.
pub fn classify(message: &str) -> (Severity, String) {
    let mut severity = Severity::Warning;
    let mut message = message.to_string();

    apply_pass(
        WARNING_RULES,
        Severity::Warning,
        true,
        &mut severity,
        &mut message,
    );
    apply_pass(
        ERROR_RULES,
        Severity::Error,
        false,
        &mut severity,
        &mut message,
    );

    (severity, message)
}

fn apply_pass(
    rules: &[Rule],
    set_to: Severity,
    force: bool,
    severity: &mut Severity,
    message: &mut String,
) {
    for rule in rules {
        let found = message.contains(rule.pattern());

        if force || found {
            *severity = set_to;
        }
        if found {
            if let Some(replace) = rule.replacement() {
                *message = replace.to_string();
            }
        }
    }
}

/// True if the (final, post-rewrite) message matches the suppression list.
pub fn is_noise(message: &str) -> bool {
    NOISE.iter().any(|bogus| message.contains(bogus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_message_defaults_to_warning() {
        let (severity, message) = classify("Unexpected use of '++'.");
        assert_eq!(severity, Severity::Warning);
        assert_eq!(message, "Unexpected use of '++'.");
    }

    #[test]
    fn test_error_rule_match_sets_error() {
        let (severity, message) = classify("Missing semicolon.");
        assert_eq!(severity, Severity::Error);
        assert_eq!(message, "Missing semicolon.");
    }

    #[test]
    fn test_substring_matches_anywhere_in_message() {
        let (severity, _) = classify("Expected an identifier and instead saw ')'.");
        assert_eq!(severity, Severity::Error);
    }

    #[test]
    fn test_warning_rule_rewrites_message() {
        let (severity, message) = classify("Expected '{' and instead saw 'return'.");
        // The error pass runs on the rewritten text, which no longer
        // contains " and instead saw"
        assert_eq!(message, "Statement body should be inside '{ }' braces.");
        assert_eq!(severity, Severity::Warning);
    }

    #[test]
    fn test_plain_brace_expectation_becomes_warning() {
        let (severity, message) = classify("Expected '{'.");
        assert_eq!(severity, Severity::Warning);
        assert_eq!(message, "Statement body should be inside '{ }' braces.");
    }

    #[test]
    fn test_error_pass_reads_rewritten_message() {
        // No warning rule touches this, so the error pass sees it as-is
        let (severity, _) = classify("'foo' is not defined.");
        assert_eq!(severity, Severity::Error);
    }

    #[test]
    fn test_noise_detection_is_case_sensitive() {
        assert!(is_noise("Dangerous comment."));
        assert!(!is_noise("dangerous comment."));
        assert!(!is_noise("Missing semicolon."));
    }

    #[test]
    fn test_rule_accessors() {
        let replace = Rule::Replace("find", "replace");
        assert_eq!(replace.pattern(), "find");
        assert_eq!(replace.replacement(), Some("replace"));

        let bare = Rule::Match("find");
        assert_eq!(bare.pattern(), "find");
        assert_eq!(bare.replacement(), None);
    }
}
