//! Placeholder mismatch detection.
//!
//! Qt substitutes `%1`..`%99` via `QString::arg` and `%n` in numerus
//! messages. A finished translation whose placeholder set differs from its
//! source will format wrongly at runtime (or crash the string out of its
//! slot), so mismatches are errors.
//!
//! Numerus messages are skipped: plural forms legitimately drop or repeat
//! `%n` in some languages.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::scan::LoadedCatalog;
use crate::issues::PlaceholderMismatchIssue;
use crate::rules::{message_ref, sort_by_location};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:n|[1-9][0-9]?)").expect("placeholder regex is valid"));

/// Placeholders occurring in a string, deduplicated and ordered.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn check_placeholders(catalogs: &[LoadedCatalog]) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for context in &catalog.unit.contexts {
            for message in &context.messages {
                if message.numerus {
                    continue;
                }
                let Some(translated) = message.translation.display_text() else {
                    continue;
                };

                let expected = placeholders(&message.source);
                let actual = placeholders(translated);
                if expected == actual {
                    continue;
                }

                issues.push(PlaceholderMismatchIssue {
                    message: message_ref(catalog, context, message),
                    missing: expected.difference(&actual).cloned().collect(),
                    extra: actual.difference(&expected).cloned().collect(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |issue| &issue.message);
    issues
}
