//! Duplicate key detection.
//!
//! Within one context, (source, comment) pairs should be unique. The format
//! tolerates duplicates and the loader resolves them deterministically (last
//! occurrence wins), but they usually indicate a bad merge, so the check
//! surfaces them. The reported location is the winning occurrence.

use std::collections::HashMap;

use crate::catalog::scan::LoadedCatalog;
use crate::issues::DuplicateMessageIssue;
use crate::rules::{message_ref, sort_by_location};

pub fn check_duplicates(catalogs: &[LoadedCatalog]) -> Vec<DuplicateMessageIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for context in &catalog.unit.contexts {
            let mut seen: HashMap<(&str, Option<&str>), Vec<&crate::catalog::Message>> =
                HashMap::new();
            for message in &context.messages {
                seen.entry((message.source.as_str(), message.comment.as_deref()))
                    .or_default()
                    .push(message);
            }

            for ((_, comment), occurrences) in seen {
                if occurrences.len() < 2 {
                    continue;
                }
                // Document order is preserved, so the last element is the
                // one the loader keeps.
                let winner = occurrences[occurrences.len() - 1];
                issues.push(DuplicateMessageIssue {
                    message: message_ref(catalog, context, winner),
                    comment: comment.map(str::to_string),
                    occurrences: occurrences.len(),
                });
            }
        }
    }

    sort_by_location(&mut issues, |issue| &issue.message);
    issues
}
