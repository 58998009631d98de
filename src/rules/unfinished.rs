//! Unfinished translation detection.
//!
//! Flags every message whose translation carries `type="unfinished"`: such
//! messages have no usable translation and lookup falls back to the source
//! text, so they are exactly the remaining translator workload.

use crate::catalog::Status;
use crate::catalog::scan::LoadedCatalog;
use crate::issues::UnfinishedIssue;
use crate::rules::{message_ref, sort_by_location};

pub fn check_unfinished(catalogs: &[LoadedCatalog]) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for context in &catalog.unit.contexts {
            for message in &context.messages {
                if message.translation.status == Status::Unfinished {
                    issues.push(UnfinishedIssue {
                        message: message_ref(catalog, context, message),
                    });
                }
            }
        }
    }

    sort_by_location(&mut issues, |issue| &issue.message);
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::loaded;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_unfinished_messages_only() {
        let catalog = loaded(
            r#"<TS version="2.1" language="ro_RO">
<context>
    <name>ConfigureAudio</name>
    <message>
        <source>Audio</source>
        <translation>Audio</translation>
    </message>
    <message>
        <source>Output Engine</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>"#,
            "ro_RO.ts",
        );

        let issues = check_unfinished(&[catalog]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message.source, "Output Engine");
        assert_eq!(issues[0].message.context, "ConfigureAudio");
        assert_eq!(issues[0].message.language, "ro_RO");
    }

    #[test]
    fn vanished_is_not_unfinished() {
        let catalog = loaded(
            r#"<TS version="2.1" language="de">
<context>
    <name>Old</name>
    <message>
        <source>Gone</source>
        <translation type="vanished">Weg</translation>
    </message>
</context>
</TS>"#,
            "de.ts",
        );

        assert!(check_unfinished(&[catalog]).is_empty());
    }

    #[test]
    fn issues_are_sorted_across_files() {
        let a = loaded(
            r#"<TS version="2.1" language="ro_RO">
<context>
    <name>B</name>
    <message>
        <source>two</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>"#,
            "ro_RO.ts",
        );
        let b = loaded(
            r#"<TS version="2.1" language="de">
<context>
    <name>A</name>
    <message>
        <source>one</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>"#,
            "de.ts",
        );

        let issues = check_unfinished(&[a, b]);
        assert_eq!(issues[0].message.file_path, "de.ts");
        assert_eq!(issues[1].message.file_path, "ro_RO.ts");
    }
}
