/// Dispatch through the editor's launcher command (`code --open-url <url>`).
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use super::UrlOpener;
use crate::debug::LaunchError;

/// Runs `<program> --open-url <url>` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
}

impl CommandOpener {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl UrlOpener for CommandOpener {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let status = Command::new(&self.program)
            .arg("--open-url")
            .arg(url)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| {
                if source.kind() == ErrorKind::NotFound {
                    LaunchError::LauncherNotFound {
                        program: self.program.clone(),
                        url: url.to_owned(),
                    }
                } else {
                    LaunchError::LauncherIo {
                        program: self.program.clone(),
                        source,
                    }
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::LauncherFailed {
                program: self.program.clone(),
                status,
            })
        }
    }

    fn describe(&self) -> String {
        format!("{} --open-url", self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_reports_url() {
        let opener = CommandOpener::new("code-dbg-test-no-such-launcher");
        let err = opener.open("vscode://x/launch?payload=e30=").unwrap_err();
        match err {
            LaunchError::LauncherNotFound { program, url } => {
                assert_eq!(program, "code-dbg-test-no-such-launcher");
                assert_eq!(url, "vscode://x/launch?payload=e30=");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_reports_status() {
        let opener = CommandOpener::new("false");
        let err = opener.open("vscode://x").unwrap_err();
        assert!(matches!(err, LaunchError::LauncherFailed { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_succeeding_program() {
        // `true` ignores its arguments.
        assert!(CommandOpener::new("true").open("vscode://x").is_ok());
    }
}
