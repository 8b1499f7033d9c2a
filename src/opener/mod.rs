/// Handing the launch URL to VS Code.
pub mod command;
#[cfg(windows)]
pub mod system;

pub use command::CommandOpener;
#[cfg(windows)]
pub use system::SystemOpener;

use crate::debug::{LaunchError, Scheme};

/// Attempt to open a URL; the only side effect `code-dbg` has.
pub trait UrlOpener {
    /// Open `url`, blocking until the handler has accepted or rejected it.
    ///
    /// # Errors
    ///
    /// Returns a `LaunchError::Launcher*` variant describing why the URL
    /// could not be handed off.
    fn open(&self, url: &str) -> Result<(), LaunchError>;

    /// Short human description for `--debug` output.
    fn describe(&self) -> String;
}

/// The opener for the current platform: the shell's protocol handler.
#[cfg(windows)]
#[must_use]
pub fn for_platform(_scheme: Scheme) -> Box<dyn UrlOpener> {
    Box::new(SystemOpener)
}

/// The opener for the current platform: the `code` / `code-insiders`
/// launcher, since the URL handler is not reliably registered on Linux.
#[cfg(not(windows))]
#[must_use]
pub fn for_platform(scheme: Scheme) -> Box<dyn UrlOpener> {
    Box::new(CommandOpener::new(scheme.launcher()))
}
