use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("Created .tscheckrc.json"));

    let config = test.read_file(".tscheckrc.json")?;
    assert!(config.contains("languagesRoot"));
    assert!(config.contains("sourceLanguage"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tscheckrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("already exists"));
    assert_eq!(test.read_file(".tscheckrc.json")?, "{}");

    Ok(())
}
