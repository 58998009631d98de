//! Empty finished translation detection.
//!
//! A message with no `type` attribute claims to be finished, but an empty
//! translation text means the UI would show nothing. Linguist never writes
//! this state; it shows up after hand edits or bad merges.

use crate::catalog::scan::LoadedCatalog;
use crate::issues::EmptyTranslationIssue;
use crate::rules::{message_ref, sort_by_location};

pub fn check_empty(catalogs: &[LoadedCatalog]) -> Vec<EmptyTranslationIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for context in &catalog.unit.contexts {
            for message in &context.messages {
                let translation = &message.translation;
                if translation.status.is_finished()
                    && translation.text.is_empty()
                    && translation.forms.iter().all(String::is_empty)
                {
                    issues.push(EmptyTranslationIssue {
                        message: message_ref(catalog, context, message),
                    });
                }
            }
        }
    }

    sort_by_location(&mut issues, |issue| &issue.message);
    issues
}
