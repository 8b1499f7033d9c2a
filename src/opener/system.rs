/// Dispatch through the OS default URL handler (Windows).
use super::UrlOpener;
use crate::debug::LaunchError;

/// Hands the URL to the registered `vscode:` protocol handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        open::that(url).map_err(|source| LaunchError::LauncherIo {
            program: self.describe(),
            source,
        })
    }

    fn describe(&self) -> String {
        "the default URL handler".to_owned()
    }
}
