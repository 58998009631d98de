use anyhow::Result;

use crate::{CliTest, run};

const CLEAN_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ro_RO" sourcelanguage="en">
<context>
    <name>CheatDialog</name>
    <message>
        <source>Cheats</source>
        <translation>Coduri de Trișat</translation>
    </message>
</context>
</TS>
"#;

const MIXED_TS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ro_RO" sourcelanguage="en">
<context>
    <name>ConfigureAudio</name>
    <message>
        <source>Output Engine</source>
        <translation type="unfinished"/>
    </message>
    <message>
        <source>Pica Breakpoints</source>
        <translation type="vanished">Puncte de întrerupere Pica</translation>
    </message>
    <message>
        <source>Speed: %1%</source>
        <translation>Viteză: 100%</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", CLEAN_TS)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("Checked 1 catalog file"));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_mixed_catalog_reports_all_rules() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", MIXED_TS)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, 1);

    // Unfinished message displays the source text at runtime
    assert!(output.stdout.contains("warning: \"Output Engine\""));
    assert!(output.stdout.contains("unfinished"));
    assert!(output.stdout.contains("falls back to the source text"));

    // Vanished message
    assert!(output.stdout.contains("warning: \"Pica Breakpoints\""));
    assert!(output.stdout.contains("vanished"));

    // Finished translation dropped the %1 placeholder
    assert!(output.stdout.contains("error: \"Speed: %1%\""));
    assert!(output.stdout.contains("placeholder-mismatch"));
    assert!(output.stdout.contains("translation is missing %1"));

    assert!(output.stdout.contains("3 problems (1 error, 2 warnings)"));

    Ok(())
}

#[test]
fn test_single_rule_selection() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", MIXED_TS)?;

    let output = run(test.check_command().arg("vanished"))?;
    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("Pica Breakpoints"));
    assert!(!output.stdout.contains("Output Engine"));
    assert!(!output.stdout.contains("placeholder-mismatch"));

    Ok(())
}

#[test]
fn test_duplicate_rule() -> Result<()> {
    let test = CliTest::with_file(
        "dist/languages/ro_RO.ts",
        r#"<TS version="2.1" language="ro_RO">
<context>
    <name>GMainWindow</name>
    <message>
        <source>Load File...</source>
        <translation>Încarcă Fișier...</translation>
    </message>
    <message>
        <source>Load File...</source>
        <translation>Deschide Fișier...</translation>
    </message>
</context>
</TS>"#,
    )?;

    let output = run(test.check_command().arg("duplicate"))?;
    assert_eq!(output.code, 1);
    assert!(output.stdout.contains("duplicate-message"));
    assert!(output.stdout.contains("the last one wins"));

    Ok(())
}

#[test]
fn test_single_language_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("dist/languages/ro_RO.ts", MIXED_TS)?;
    test.write_file("dist/languages/de.ts", CLEAN_TS.replace("ro_RO", "de").as_str())?;

    let output = run(test.check_command().args(["--language", "de"]))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tscheckrc.json",
        r#"{
        "languagesRoot": "./languages",
        "ignores": ["**/wip_*.ts"]
    }"#,
    )?;
    test.write_file("languages/ro_RO.ts", CLEAN_TS)?;
    test.write_file("languages/wip_nb.ts", MIXED_TS)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("Checked 1 catalog file"));

    Ok(())
}

#[test]
fn test_missing_languages_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Languages directory not found"));

    Ok(())
}

#[test]
fn test_skipped_entries_warn_but_do_not_fail() -> Result<()> {
    // Message without <source> is skipped with a warning; the rest loads.
    let test = CliTest::with_file(
        "dist/languages/ro_RO.ts",
        r#"<TS version="2.1" language="ro_RO">
<context>
    <name>CheatDialog</name>
    <message>
        <translation>Fără sursă</translation>
    </message>
    <message>
        <source>Cheats</source>
        <translation>Coduri de Trișat</translation>
    </message>
</context>
</TS>"#,
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("no issues found"));
    assert!(output.stderr.contains("1 entry skipped while loading"));

    let verbose = run(test.check_command().arg("-v"))?;
    assert_eq!(verbose.code, 0);
    assert!(verbose.stderr.contains("<source>"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("stats"));
    assert!(output.stdout.contains("query"));

    Ok(())
}
