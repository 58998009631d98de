//! Catalog lookup with graceful fallback.
//!
//! [`Catalog`] is the flattened, immutable form of a [`TranslationUnit`]:
//! a hash map from (context, source, comment) to the finished translation
//! text. Lookup never fails; anything without a usable translation resolves
//! to the source string unchanged, so a missing or corrupt catalog degrades
//! to source-language display rather than breaking the caller.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::model::TranslationUnit;

/// Lookup key for one message. The disambiguating comment is part of the
/// key, mirroring `tr("text", "comment")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MessageKey {
    context: String,
    source: String,
    comment: Option<String>,
}

/// Immutable translation table for one language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: Option<String>,
    entries: HashMap<MessageKey, String>,
}

impl Catalog {
    /// An empty catalog; every lookup falls back to the source text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flatten a unit into a lookup table.
    ///
    /// Only finished messages with usable text are inserted; unfinished,
    /// vanished and obsolete messages fall through to the source text at
    /// lookup time. Duplicate (source, comment) pairs within a context are
    /// resolved by document order: the last occurrence wins.
    pub fn from_unit(unit: &TranslationUnit) -> Self {
        let mut entries = HashMap::with_capacity(unit.message_count());
        for context in &unit.contexts {
            for message in &context.messages {
                let Some(text) = message.translation.display_text() else {
                    continue;
                };
                entries.insert(
                    MessageKey {
                        context: context.name.clone(),
                        source: message.source.clone(),
                        comment: message.comment.clone(),
                    },
                    text.to_string(),
                );
            }
        }
        Self {
            language: unit.language.clone(),
            entries,
        }
    }

    /// Resolve a display string for a message without a disambiguating
    /// comment. Returns the source text when no finished translation exists.
    pub fn lookup<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.lookup_with_comment(context, source, None)
    }

    /// Resolve a display string for a (context, source, comment) key.
    pub fn lookup_with_comment<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: Option<&str>,
    ) -> &'a str {
        let key = MessageKey {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.map(str::to_string),
        };
        match self.entries.get(&key) {
            Some(translation) => translation,
            None => source,
        }
    }

    /// Whether a finished translation exists for the key.
    pub fn contains(&self, context: &str, source: &str, comment: Option<&str>) -> bool {
        let key = MessageKey {
            context: context.to_string(),
            source: source.to_string(),
            comment: comment.map(str::to_string),
        };
        self.entries.contains_key(&key)
    }

    /// Number of finished entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Language tag the catalog was loaded for, if declared.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Process-wide catalog holder for the load-then-read-only-share model.
///
/// The catalog is built once and read concurrently without further
/// synchronization; a language switch installs a brand-new catalog by
/// swapping the shared `Arc`. Readers holding a [`Translator::snapshot`]
/// keep the old catalog alive until they drop it, so every reader sees the
/// old or the new catalog in full, never a partial one.
#[derive(Debug, Default)]
pub struct Translator {
    current: RwLock<Arc<Catalog>>,
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Replace the whole catalog, e.g. on a language switch.
    pub fn install(&self, catalog: Catalog) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(catalog);
    }

    /// The current catalog. Cheap; clones an `Arc`.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Convenience lookup against the current catalog.
    pub fn translate(&self, context: &str, source: &str) -> String {
        self.snapshot().lookup(context, source).to_string()
    }
}
