//! Check rules for TS catalogs.
//!
//! Pure functions over loaded catalogs. Each rule takes the scanned
//! catalogs and returns a specific issue type, sorted by file path, line,
//! and source for deterministic output.
//!
//! ## Module Structure
//!
//! - `unfinished`: messages without a usable translation
//! - `vanished`: messages whose source string left the application
//! - `duplicate`: repeated (source, comment) keys within one context
//! - `placeholder`: `%1`/`%n` mismatches between source and translation
//! - `empty`: finished messages with no translation text

pub mod duplicate;
pub mod empty;
pub mod placeholder;
pub mod unfinished;
pub mod vanished;

use crate::catalog::scan::LoadedCatalog;
use crate::catalog::{Context, Message};
use crate::issues::MessageRef;

/// Build the report reference for one message.
pub(crate) fn message_ref(
    catalog: &LoadedCatalog,
    context: &Context,
    message: &Message,
) -> MessageRef {
    MessageRef::new(
        catalog.file_path.clone(),
        message.line,
        catalog.language(),
        context.name.clone(),
        message.source.clone(),
    )
}

/// Deterministic issue order: file, then line, then source.
pub(crate) fn sort_by_location<T>(issues: &mut [T], message: impl Fn(&T) -> &MessageRef) {
    issues.sort_by(|a, b| {
        let (a, b) = (message(a), message(b));
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.source.cmp(&b.source))
    });
}
