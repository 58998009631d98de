//! Vanished message detection.
//!
//! Flags messages marked `vanished` (or the legacy `obsolete`): their source
//! strings no longer exist in the application, so they are dead weight kept
//! only for translator reference and can usually be purged.

use crate::catalog::scan::LoadedCatalog;
use crate::issues::VanishedIssue;
use crate::rules::{message_ref, sort_by_location};

pub fn check_vanished(catalogs: &[LoadedCatalog]) -> Vec<VanishedIssue> {
    let mut issues = Vec::new();

    for catalog in catalogs {
        for context in &catalog.unit.contexts {
            for message in &context.messages {
                if message.translation.status.is_vanished() {
                    issues.push(VanishedIssue {
                        message: message_ref(catalog, context, message),
                        status: message.translation.status,
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
    use crate::catalog::Status;
    use crate::rules::test_support::loaded;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_vanished_and_obsolete() {
        let catalog = loaded(
            r#"<TS version="2.1" language="ro_RO">
<context>
    <name>GraphicsBreakPointsWidget</name>
    <message>
        <source>Pica Breakpoints</source>
        <translation type="vanished">Puncte de întrerupere Pica</translation>
    </message>
    <message>
        <source>CiTrace Recorder</source>
        <translation type="obsolete">Înregistrator CiTrace</translation>
    </message>
    <message>
        <source>Emulation</source>
        <translation>Emulare</translation>
    </message>
</context>
</TS>"#,
            "ro_RO.ts",
        );

        let issues = check_vanished(&[catalog]);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].status, Status::Vanished);
        assert_eq!(issues[1].status, Status::Obsolete);
        assert_eq!(issues[1].message.source, "CiTrace Recorder");
    }

    #[test]
    fn unfinished_is_not_vanished() {
        let catalog = loaded(
            r#"<TS version="2.1" language="de">
<context>
    <name>ConfigureAudio</name>
    <message>
        <source>Output Engine</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>"#,
            "de.ts",
        );

        assert!(check_vanished(&[catalog]).is_empty());
    }
}
