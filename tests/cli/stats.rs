use anyhow::Result;

use crate::{CliTest, run};

const RO_TS: &str = r#"<TS version="2.1" language="ro_RO">
<context>
    <name>GMainWindow</name>
    <message>
        <source>Load File...</source>
        <translation>Încarcă Fișier...</translation>
    </message>
    <message>
        <source>Capture Screenshot</source>
        <translation type="unfinished"/>
    </message>
    <message>
        <source>CiTrace Recorder</source>
        <translation type="vanished">Înregistrator CiTrace</translation>
    </message>
</context>
</TS>"#;

const DE_TS: &str = r#"<TS version="2.1" language="de">
<context>
    <name>GMainWindow</name>
    <message>
        <source>Load File...</source>
        <translation>Datei laden...</translation>
    </message>
</context>
</TS>"#;

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("dist/languages/ro_RO.ts", RO_TS)?;
    test.write_file("dist/languages/de.ts", DE_TS)?;

    let output = run(&mut test.stats_command())?;
    assert_eq!(output.code, 0);

    assert!(output.stdout.contains("LANGUAGE"));
    // Languages are sorted; de is complete, ro_RO is half done
    let de_pos = output.stdout.find("de").unwrap();
    let ro_pos = output.stdout.find("ro_RO").unwrap();
    assert!(de_pos < ro_pos);
    assert!(output.stdout.contains("100.0%"));
    assert!(output.stdout.contains("50.0%"));

    Ok(())
}

#[test]
fn test_stats_single_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("dist/languages/ro_RO.ts", RO_TS)?;
    test.write_file("dist/languages/de.ts", DE_TS)?;

    let output = run(test.stats_command().args(["--language", "ro_RO"]))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("ro_RO"));
    assert!(!output.stdout.contains("\nde"));

    Ok(())
}

#[test]
fn test_stats_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("dist/languages/.gitkeep", "")?;

    let output = run(&mut test.stats_command())?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("No catalog files found"));

    Ok(())
}
