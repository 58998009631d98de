use anyhow::Result;

use crate::{CliTest, run};

const RO_TS: &str = r#"<TS version="2.1" language="ro_RO" sourcelanguage="en">
<context>
    <name>CheatDialog</name>
    <message>
        <source>Cheats</source>
        <translation>Coduri de Trișat</translation>
    </message>
</context>
<context>
    <name>ConfigureAudio</name>
    <message>
        <source>Output Engine</source>
        <translation type="unfinished"/>
    </message>
    <message>
        <source>%1 %</source>
        <comment>Volume percentage (e.g. 50%)</comment>
        <translation>%1 %</translation>
    </message>
</context>
</TS>"#;

#[test]
fn test_query_finished_translation() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", RO_TS)?;

    let output = run(test
        .query_command()
        .args(["CheatDialog", "Cheats", "--language", "ro_RO"]))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("Coduri de Trișat\n"));
    assert!(output.stdout.contains("translated in ro_RO"));

    Ok(())
}

#[test]
fn test_query_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", RO_TS)?;

    let output = run(test
        .query_command()
        .args(["ConfigureAudio", "Output Engine", "--language", "ro_RO"]))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("Output Engine\n"));
    assert!(output.stdout.contains("falling back to the source text"));

    Ok(())
}

#[test]
fn test_query_comment_is_part_of_the_key() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", RO_TS)?;

    let with_comment = run(test.query_command().args([
        "ConfigureAudio",
        "%1 %",
        "--comment",
        "Volume percentage (e.g. 50%)",
        "--language",
        "ro_RO",
    ]))?;
    assert_eq!(with_comment.code, 0);
    assert!(with_comment.stdout.contains("translated in ro_RO"));

    // Same source without the comment is a different key
    let without_comment = run(test
        .query_command()
        .args(["ConfigureAudio", "%1 %", "--language", "ro_RO"]))?;
    assert_eq!(without_comment.code, 0);
    assert!(without_comment.stdout.contains("falling back to the source text"));

    Ok(())
}

#[test]
fn test_query_prefix_matches_language_file() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", RO_TS)?;

    let output = run(test
        .query_command()
        .args(["CheatDialog", "Cheats", "--language", "ro"]))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("Coduri de Trișat\n"));

    Ok(())
}

#[test]
fn test_query_unknown_language_is_an_error() -> Result<()> {
    let test = CliTest::with_file("dist/languages/ro_RO.ts", RO_TS)?;

    let output = run(test
        .query_command()
        .args(["CheatDialog", "Cheats", "--language", "ja"]))?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("No catalog for language \"ja\""));

    Ok(())
}
