use std::{
    fs,
    path::PathBuf,
    process::Command,
};

use anyhow::{Context, Ok, Result};
use tempfile::TempDir;

mod check;
mod init;
mod query;
mod stats;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

/// Captured output of one CLI invocation.
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(cmd: &mut Command) -> Result<CliOutput> {
    let output = cmd.output().context("Failed to run tscheck binary")?;
    Ok(CliOutput {
        code: output.status.code().context("Process was killed")?,
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tscheck"));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn query_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("query");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
