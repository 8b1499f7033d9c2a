/// Errors from building and dispatching a debug launch.
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can stop a `code-dbg` invocation.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The `--` separator between options and the executable is missing.
    #[error("Missing '--' separator")]
    MissingSeparator,

    /// Option parsing failed (unknown flag, missing value, ...).
    #[error("{0}")]
    Usage(String),

    /// Nothing followed the separator.
    #[error("Missing executable after '--'")]
    MissingExecutable,

    /// An argument or resolved path is not valid UTF-8 and cannot go into the payload.
    #[error("Not valid UTF-8: {0}")]
    InvalidUnicode(String),

    /// The executable was given as an absolute path that does not exist.
    #[error("Executable not found: {path}")]
    ExecutableNotFound {
        /// The normalized absolute path that was checked.
        path: String,
    },

    /// The process working directory could not be read.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Writing the URL or confirmation to stdout failed.
    #[error("Cannot write output: {0}")]
    Output(#[source] std::io::Error),

    /// A payload could not be encoded or decoded.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The launcher command is not on `PATH`.
    #[error("VS Code executable not found in PATH ('{program}')")]
    LauncherNotFound {
        /// Launcher command name, e.g. `code`.
        program: String,
        /// The URL that could not be dispatched.
        url: String,
    },

    /// The launcher ran but reported failure.
    #[error("Failed to launch VS Code: '{program}' failed ({status})")]
    LauncherFailed {
        /// Launcher command name.
        program: String,
        /// Exit status reported by the launcher.
        status: ExitStatus,
    },

    /// Any other I/O failure while handing the URL off.
    #[error("Failed to launch VS Code via {program}: {source}")]
    LauncherIo {
        /// Launcher command name, or the OS handler description.
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingSeparator
            | Self::Usage(_)
            | Self::MissingExecutable
            | Self::InvalidUnicode(_)
            | Self::ExecutableNotFound { .. }
            | Self::CurrentDir(_)
            | Self::Output(_)
            | Self::InvalidPayload(_)
            | Self::LauncherNotFound { .. }
            | Self::LauncherFailed { .. }
            | Self::LauncherIo { .. } => 1,
        }
    }
}
