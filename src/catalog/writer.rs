//! TS catalog writer.
//!
//! Serializes a [`TranslationUnit`] back to Qt Linguist XML in the layout
//! `lupdate` emits: four-space indent inside contexts, `type` attribute on
//! unfinished/vanished translations, self-closing empty elements. Finished
//! entries round-trip through the parser with their text intact.

use std::fmt::Write as _;

use super::model::{Context, Message, Status, Translation, TranslationUnit};

/// Serialize a unit to a complete TS document.
pub fn write_ts_string(unit: &TranslationUnit) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n");

    out.push_str("<TS");
    if let Some(version) = &unit.version {
        let _ = write!(out, " version=\"{}\"", escape_xml(version));
    }
    if let Some(language) = &unit.language {
        let _ = write!(out, " language=\"{}\"", escape_xml(language));
    }
    if let Some(source_language) = &unit.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape_xml(source_language));
    }
    out.push_str(">\n");

    for context in &unit.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    let _ = writeln!(out, "    <name>{}</name>", escape_xml(&context.name));
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    if message.numerus {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }

    for location in &message.locations {
        out.push_str("        <location");
        if let Some(filename) = &location.filename {
            let _ = write!(out, " filename=\"{}\"", escape_xml(filename));
        }
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    let _ = writeln!(out, "        <source>{}</source>", escape_xml(&message.source));
    if let Some(comment) = &message.comment {
        let _ = writeln!(out, "        <comment>{}</comment>", escape_xml(comment));
    }
    if let Some(note) = &message.translator_comment {
        let _ = writeln!(
            out,
            "        <translatorcomment>{}</translatorcomment>",
            escape_xml(note)
        );
    }
    write_translation(out, &message.translation);

    out.push_str("    </message>\n");
}

fn write_translation(out: &mut String, translation: &Translation) {
    out.push_str("        <translation");
    match translation.status {
        Status::Finished => {}
        status => {
            let _ = write!(out, " type=\"{}\"", status);
        }
    }

    if !translation.forms.is_empty() {
        out.push_str(">\n");
        for form in &translation.forms {
            let _ = writeln!(
                out,
                "            <numerusform>{}</numerusform>",
                escape_xml(form)
            );
        }
        out.push_str("        </translation>\n");
    } else if translation.text.is_empty() {
        out.push_str("/>\n");
    } else {
        let _ = writeln!(out, ">{}</translation>", escape_xml(&translation.text));
    }
}

/// Escape the five XML-reserved characters for element and attribute text.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
