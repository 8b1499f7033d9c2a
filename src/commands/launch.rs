/// `code-dbg [OPTIONS] -- <exe> [args...]`: build the launch URL and dispatch it.
use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::Invocation;
use crate::cli::output::{OutputCtx, write_launched, write_url};
use crate::debug::{
    DebugPayload, LaunchError, Scheme, launch_url, payload_param, resolve_cwd, resolve_exe,
};
use crate::opener::UrlOpener;

/// Run one launch.
///
/// The URL is written to `out` as soon as it is built, so it is visible even
/// when dispatch fails. With `--url-only` the opener is never called.
///
/// # Errors
///
/// - `LaunchError::CurrentDir` — `current_dir` was needed and failed
/// - `LaunchError::ExecutableNotFound` — absolute executable path does not exist
/// - `LaunchError::InvalidUnicode` / `LaunchError::InvalidPayload` — payload cannot be built
/// - `LaunchError::Output` — writing to `out` failed
/// - `LaunchError::Launcher*` — from `opener`
pub fn run<F>(
    invocation: &Invocation,
    current_dir: F,
    opener: &dyn UrlOpener,
    out: &mut impl Write,
    ctx: &OutputCtx,
) -> Result<(), LaunchError>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    let options = &invocation.options;

    let cwd = resolve_cwd(options.cwd_dir(), current_dir)?;
    let exe = resolve_exe(&invocation.exe)?;
    ctx.trace(|| format!("cwd: {cwd}"));
    ctx.trace(|| format!("exe: {exe}"));

    let payload = DebugPayload::new(exe, invocation.args.clone(), cwd);
    let url = launch_url(Scheme::from_insiders(options.insiders), &payload)?;
    ctx.trace(|| {
        // Decoded back out of the URL, i.e. what the extension will see.
        payload_param(&url)
            .and_then(|encoded| DebugPayload::decode(encoded).ok())
            .and_then(|decoded| decoded.to_json().ok())
            .map_or_else(|| "payload: <undecodable>".to_owned(), |json| format!("payload: {json}"))
    });
    write_url(out, &url).map_err(LaunchError::Output)?;

    if options.url_only {
        return Ok(());
    }

    ctx.trace(|| format!("opening with {}", opener.describe()));
    {
        let _t = ctx.timer("open_url");
        opener.open(&url)?;
    }

    write_launched(out, &payload.exe).map_err(LaunchError::Output)
}
