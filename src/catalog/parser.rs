//! TS catalog loader.
//!
//! Parses the Qt Linguist XML format into the [`model`](super::model) types.
//! A malformed document fails the whole file with a located error; a
//! malformed individual context or message is skipped and recorded as a
//! [`ParseWarning`] so the rest of the catalog stays usable.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use xmltree::{Element, XMLNode};

use super::model::{Context, Location, Message, Status, Translation, TranslationUnit};

/// A recovered, non-fatal problem found while loading a catalog.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    pub file_path: String,
    pub detail: String,
}

/// A successfully loaded catalog plus any entries that had to be skipped.
#[derive(Debug)]
pub struct LoadOutcome {
    pub unit: TranslationUnit,
    pub warnings: Vec<ParseWarning>,
}

/// Load a TS catalog from a file.
pub fn parse_ts_file(path: &Path) -> Result<LoadOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TS file: {}", path.display()))?;
    parse_ts_str(&content, &path.to_string_lossy())
}

/// Load a TS catalog from a string.
///
/// `file_path` is used for warning attribution and error context only.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<LoadOutcome> {
    let root = Element::parse(content.as_bytes())
        .with_context(|| format!("Failed to parse TS file: {}", file_path))?;

    if root.name != "TS" {
        bail!(
            "Failed to parse TS file: {}: expected <TS> root element, found <{}>",
            file_path,
            root.name
        );
    }

    let message_lines = message_line_table(content);
    let mut warnings = Vec::new();
    let mut unit = TranslationUnit {
        language: root.attributes.get("language").cloned(),
        source_language: root.attributes.get("sourcelanguage").cloned(),
        version: root.attributes.get("version").cloned(),
        contexts: Vec::new(),
    };

    // Ordinal of the current <message> element across the whole document,
    // counting skipped ones, so line attribution stays aligned.
    let mut ordinal = 0usize;

    for child in &root.children {
        let XMLNode::Element(el) = child else {
            continue;
        };
        if el.name != "context" {
            // Unknown elements (dependencies, extra-*) are ignored for
            // forward compatibility.
            continue;
        }
        match parse_context(el, &message_lines, &mut ordinal, file_path, &mut warnings) {
            Some(context) => unit.contexts.push(context),
            None => warnings.push(ParseWarning {
                file_path: file_path.to_string(),
                detail: "skipped <context> without a <name> element".to_string(),
            }),
        }
    }

    Ok(LoadOutcome { unit, warnings })
}

fn parse_context(
    el: &Element,
    message_lines: &[usize],
    ordinal: &mut usize,
    file_path: &str,
    warnings: &mut Vec<ParseWarning>,
) -> Option<Context> {
    let mut name = None;
    let mut messages = Vec::new();

    for child in &el.children {
        let XMLNode::Element(child) = child else {
            continue;
        };
        match child.name.as_str() {
            "name" => name = Some(text_content(child)),
            "message" => {
                let line = message_lines.get(*ordinal).copied().unwrap_or(1);
                *ordinal += 1;
                match parse_message(child, line) {
                    Ok(message) => messages.push(message),
                    Err(detail) => warnings.push(ParseWarning {
                        file_path: file_path.to_string(),
                        detail: format!("skipped message at line {}: {}", line, detail),
                    }),
                }
            }
            _ => {}
        }
    }

    name.map(|name| Context { name, messages })
}

fn parse_message(el: &Element, line: usize) -> Result<Message, String> {
    let numerus = el.attributes.get("numerus").map(String::as_str) == Some("yes");
    let mut message = Message {
        numerus,
        line,
        ..Default::default()
    };
    let mut found_source = false;

    for child in &el.children {
        let XMLNode::Element(child) = child else {
            continue;
        };
        match child.name.as_str() {
            "location" => message.locations.push(Location {
                filename: child.attributes.get("filename").cloned(),
                // Location hints are informational; an unparsable line
                // attribute degrades to a file-only hint.
                line: child
                    .attributes
                    .get("line")
                    .and_then(|l| l.parse().ok()),
            }),
            "source" => {
                message.source = text_content(child);
                found_source = true;
            }
            "comment" => message.comment = Some(text_content(child)),
            "translatorcomment" => {
                message.translator_comment = Some(text_content(child));
            }
            "translation" => message.translation = parse_translation(child)?,
            // oldsource, oldcomment, extracomment, extra-* are translator
            // tooling data; not load-bearing for lookup or checks.
            _ => {}
        }
    }

    if !found_source {
        return Err("missing required <source> element".to_string());
    }
    Ok(message)
}

fn parse_translation(el: &Element) -> Result<Translation, String> {
    let status = match el.attributes.get("type") {
        None => Status::Finished,
        Some(value) => value.parse()?,
    };

    let mut forms = Vec::new();
    for child in &el.children {
        if let XMLNode::Element(child) = child
            && child.name == "numerusform"
        {
            forms.push(text_content(child));
        }
    }

    // Numerus translations carry their text in the forms, not the element.
    let text = if forms.is_empty() {
        text_content(el)
    } else {
        String::new()
    };

    Ok(Translation { text, forms, status })
}

/// Concatenated character data of an element (text and CDATA children).
fn text_content(el: &Element) -> String {
    let mut out = String::new();
    for child in &el.children {
        match child {
            XMLNode::Text(s) | XMLNode::CData(s) => out.push_str(s),
            _ => {}
        }
    }
    out
}

/// 1-based line numbers of each `<message` tag, in document order.
///
/// `xmltree` does not expose source positions, so line attribution works the
/// way the key-line search does in JSON-based checkers: scan the raw text
/// once and map byte offsets through a line index. Escaped text can never
/// contain a literal `<message`, so tag occurrences align with parsed
/// elements one to one.
fn message_line_table(content: &str) -> Vec<usize> {
    let line_index = build_line_index(content);
    let mut lines = Vec::new();
    let mut search_start = 0;
    while let Some(pos) = content[search_start..].find("<message") {
        let offset = search_start + pos;
        lines.push(offset_to_line(&line_index, offset));
        search_start = offset + "<message".len();
    }
    lines
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset, by binary search.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
