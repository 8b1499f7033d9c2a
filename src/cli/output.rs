/// Output: the URL and confirmation on stdout, errors and `--debug` traces on stderr.
use std::io::Write;

use super::args::USAGE;
use crate::debug::LaunchError;

/// Output context passed to the launch command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// When true, print `[debug]` lines and timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Print a `[debug]` line to stderr when `--debug` is set.
    pub fn trace(&self, message: impl FnOnce() -> String) {
        if self.debug {
            eprintln!("[debug] {}", message());
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write the launch URL as a single line.
///
/// # Errors
///
/// Propagates the writer's I/O error.
pub fn write_url(out: &mut impl Write, url: &str) -> std::io::Result<()> {
    writeln!(out, "{url}")
}

/// Write the post-dispatch confirmation naming the executable's file name.
///
/// # Errors
///
/// Propagates the writer's I/O error.
pub fn write_launched(out: &mut impl Write, exe: &str) -> std::io::Result<()> {
    let name = std::path::Path::new(exe)
        .file_name()
        .map_or_else(|| exe.into(), |n| n.to_string_lossy());
    writeln!(out, "Launching debugger for: {name}")
}

/// Write an error, with usage or recovery hints where useful.
pub fn write_error(out: &mut impl Write, err: &LaunchError) {
    // stderr write failures have nowhere else to go
    let _ = match err {
        LaunchError::Usage(rendered) => write!(out, "{rendered}"),
        LaunchError::MissingSeparator | LaunchError::MissingExecutable => writeln!(
            out,
            "Error: {err}\nUsage: {USAGE}\nExample: code-dbg --cwd=/tmp -- ./app.exe arg1 arg2"
        ),
        LaunchError::LauncherNotFound { url, .. } => writeln!(
            out,
            "Error: {err}.\n\
             Please ensure VS Code is installed and the proper command is available.\n\n\
             You can manually open this URL in VS Code:\n{url}"
        ),
        _ => writeln!(out, "Error: {err}"),
    };
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(err: &LaunchError) -> String {
        let mut buf = Vec::new();
        write_error(&mut buf, err);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_launched_uses_file_name() {
        let mut buf = Vec::new();
        write_launched(&mut buf, "/usr/local/bin/myapp").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Launching debugger for: myapp\n");
    }

    #[test]
    fn test_missing_separator_prints_usage() {
        let text = render(&LaunchError::MissingSeparator);
        assert!(text.starts_with("Error: Missing '--' separator\n"));
        assert!(text.contains(USAGE));
    }

    #[test]
    fn test_launcher_not_found_prints_url() {
        let text = render(&LaunchError::LauncherNotFound {
            program: "code".to_owned(),
            url: "vscode://bradphelan.code-dbg/launch?payload=e30=".to_owned(),
        });
        assert!(text.contains("not found in PATH"));
        assert!(text.ends_with("vscode://bradphelan.code-dbg/launch?payload=e30=\n"));
    }

    #[test]
    fn test_plain_error() {
        let text = render(&LaunchError::ExecutableNotFound {
            path: "/nope/app".to_owned(),
        });
        assert_eq!(text, "Error: Executable not found: /nope/app\n");
    }
}
