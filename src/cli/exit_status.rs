use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): command completed, the catalogs are clean
/// - `Failure` (1): command completed but the catalogs have issues
/// - `Error` (2): command could not run (unreadable catalog, bad config, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, the catalogs are clean.
    Success,
    /// Command completed but the catalogs have issues.
    Failure,
    /// Command could not run (unreadable catalog, bad config, ...).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        // ExitCode has no PartialEq; compare through Debug.
        for (status, code) in [
            (ExitStatus::Success, 0u8),
            (ExitStatus::Failure, 1),
            (ExitStatus::Error, 2),
        ] {
            assert_eq!(
                format!("{:?}", ExitCode::from(status)),
                format!("{:?}", ExitCode::from(code))
            );
        }
    }
}
