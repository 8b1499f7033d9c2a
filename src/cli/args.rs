/// CLI argument definitions via clap derive.
///
/// The command line is split at the first `--`. Only the part before it is
/// parsed as options; the part after is the executable and its arguments,
/// taken verbatim so the target can have flags of its own.
use std::ffi::{OsStr, OsString};
use std::path::Path;

use clap::Parser;
use clap::error::ErrorKind;

use crate::debug::LaunchError;

/// Literal token separating code-dbg options from the debuggee.
pub const SEPARATOR: &str = "--";

/// Short usage line shown for separator errors.
pub const USAGE: &str = "code-dbg [OPTIONS] -- <EXE> [EXE_ARGS]...";

const EXAMPLES: &str = "\
Examples:
  code-dbg -- ./myapp.exe --verbose --config=file.conf
  code-dbg --cwd=/path/to/wd -- /usr/local/bin/myapp arg1 arg2
  code-dbg -- ./app.exe -- --my-flag
  code-dbg --insiders -- ./app.exe

Invoked as `code-dbg-insiders`, --insiders is the default.";

/// code-dbg — launch the VS Code debugger from the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "code-dbg",
    about = "Launch the VS Code debugger on an executable, no launch.json required",
    version,
    override_usage = USAGE,
    after_help = EXAMPLES
)]
pub struct Options {
    /// Working directory for the debuggee (defaults to the current directory).
    // Kept as `OsString`: clap's `PathBuf` parser rejects `--cwd=`, which
    // means "use the current directory".
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<OsString>,

    /// Use the VS Code Insiders URL scheme and launcher.
    #[arg(long)]
    pub insiders: bool,

    /// Only print the URL; do not launch VS Code.
    #[arg(long)]
    pub url_only: bool,

    /// Print resolution and launcher timing details to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Options {
    /// The `--cwd` directory, or `None` when absent or empty.
    #[must_use]
    pub fn cwd_dir(&self) -> Option<&Path> {
        self.cwd
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(Path::new)
    }
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub options: Options,
    /// Executable path exactly as typed.
    pub exe: String,
    /// Everything after the executable, verbatim.
    pub args: Vec<String>,
}

/// Parse a raw command line (program name first).
///
/// `--help` / `--version` before the separator print and exit 0, as with
/// `clap::Parser::parse`.
///
/// # Errors
///
/// - `LaunchError::MissingSeparator` — no `--` token
/// - `LaunchError::Usage` — clap rejected the options
/// - `LaunchError::MissingExecutable` — nothing after `--`
/// - `LaunchError::InvalidUnicode` — an executable argument is not UTF-8
pub fn parse_invocation<I>(raw: I) -> Result<Invocation, LaunchError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut raw: Vec<OsString> = raw.into_iter().collect();
    let program = raw.first().cloned().unwrap_or_else(|| OsString::from("code-dbg"));

    let Some(split) = raw.iter().skip(1).position(|a| a == SEPARATOR).map(|i| i + 1) else {
        if raw.iter().skip(1).any(|a| is_info_flag(a)) {
            parse_options(&raw)?;
        }
        return Err(LaunchError::MissingSeparator);
    };

    let target = raw.split_off(split + 1);
    raw.truncate(split);

    let mut options = parse_options(&raw)?;
    if program_implies_insiders(Path::new(&program)) {
        options.insiders = true;
    }

    let mut target = target.into_iter().map(into_utf8);
    let exe = target.next().ok_or(LaunchError::MissingExecutable)??;
    let args = target.collect::<Result<Vec<_>, _>>()?;

    Ok(Invocation { options, exe, args })
}

fn parse_options(raw: &[OsString]) -> Result<Options, LaunchError> {
    Options::try_parse_from(raw).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => LaunchError::Usage(err.render().to_string()),
    })
}

fn is_info_flag(arg: &OsStr) -> bool {
    matches!(arg.to_str(), Some("-h" | "--help" | "-V" | "--version"))
}

/// Whether the binary was invoked under an `*-insiders` name
/// (e.g. a `code-dbg-insiders` symlink).
#[must_use]
pub fn program_implies_insiders(program: &Path) -> bool {
    program
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with("-insiders"))
}

fn into_utf8(arg: OsString) -> Result<String, LaunchError> {
    arg.into_string()
        .map_err(|raw| LaunchError::InvalidUnicode(raw.to_string_lossy().into_owned()))
}
