//! In-memory data model for Qt Linguist TS catalogs.
//!
//! A catalog file holds one `TranslationUnit` per language. The unit is an
//! ordered list of contexts (one per UI component), each holding an ordered
//! list of messages. Order is preserved from the document so that the writer
//! and the duplicate-key tie-break (last occurrence wins) stay deterministic.

use std::fmt;
use std::str::FromStr;

/// Completion status of a message, from the `type` attribute on
/// `<translation>`. Absence of the attribute means `Finished`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// Translation is usable and shown to users.
    #[default]
    Finished,
    /// No usable translation yet; lookup must fall back to the source text.
    Unfinished,
    /// Source string no longer exists in the application; kept for
    /// translator reference only.
    Vanished,
    /// Older spelling of `Vanished`, still emitted by some Qt versions.
    Obsolete,
}

impl Status {
    /// Whether the stored translation text may be shown to users.
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Finished)
    }

    /// Whether the source string is gone from the application
    /// (`vanished` or the legacy `obsolete`).
    pub fn is_vanished(self) -> bool {
        matches!(self, Status::Vanished | Status::Obsolete)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Status::Finished => "finished",
            Status::Unfinished => "unfinished",
            Status::Vanished => "vanished",
            Status::Obsolete => "obsolete",
        })
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unfinished" => Ok(Status::Unfinished),
            "vanished" => Ok(Status::Vanished),
            "obsolete" => Ok(Status::Obsolete),
            other => Err(format!("unknown translation type \"{}\"", other)),
        }
    }
}

/// A source-location hint (`<location filename=... line=...>`).
///
/// Informational only: it points into the application sources the string was
/// extracted from, not into the catalog file, and is never load-bearing for
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<usize>,
}

/// Translation payload of a message.
///
/// Plain messages carry `text`; numerus messages (`numerus="yes"`) carry one
/// `<numerusform>` per plural category in `forms` and an empty `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub forms: Vec<String>,
    pub status: Status,
}

impl Translation {
    /// The text a finished translation would display, if any.
    ///
    /// For numerus messages this is the first plural form; full plural
    /// selection is a runtime formatter concern, not a catalog concern.
    pub fn display_text(&self) -> Option<&str> {
        if !self.status.is_finished() {
            return None;
        }
        if let Some(first) = self.forms.first() {
            return Some(first);
        }
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }
}

/// One translatable unit: a source string plus its translation and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Immutable lookup key, exactly as extracted from the application.
    pub source: String,
    /// Disambiguating comment; part of the lookup key when present.
    pub comment: Option<String>,
    /// Free-form note added by the translator; never part of the key.
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    pub translation: Translation,
    /// Whether the message is a numerus (plural) message.
    pub numerus: bool,
    /// 1-based line of the `<message>` element in the catalog file.
    pub line: usize,
}

/// A named group of messages, typically one dialog/window/widget class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

/// The whole catalog for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationUnit {
    /// Target language tag, e.g. `ro_RO`.
    pub language: Option<String>,
    /// Language the source strings are written in, if declared.
    pub source_language: Option<String>,
    /// TS format version, e.g. `2.1`.
    pub version: Option<String>,
    pub contexts: Vec<Context>,
}

impl TranslationUnit {
    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Language tag, or `"unknown"` when the file does not declare one.
    pub fn language_or_unknown(&self) -> &str {
        self.language.as_deref().unwrap_or("unknown")
    }
}
