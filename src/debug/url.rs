/// Launch URL construction.
///
/// Format: `<scheme>://bradphelan.code-dbg/launch?payload=<base64>`.
use super::errors::LaunchError;
use super::payload::DebugPayload;

/// URI authority the code-dbg extension registers its handler under.
pub const AUTHORITY: &str = "bradphelan.code-dbg";

/// Handler path on the authority.
pub const LAUNCH_PATH: &str = "/launch";

/// Query key holding the encoded payload.
pub const PAYLOAD_KEY: &str = "payload";

/// Which VS Code build receives the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Stable,
    Insiders,
}

impl Scheme {
    #[must_use]
    pub fn from_insiders(insiders: bool) -> Self {
        if insiders { Self::Insiders } else { Self::Stable }
    }

    /// URL scheme registered by this build.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "vscode",
            Self::Insiders => "vscode-insiders",
        }
    }

    /// Launcher command shipped with this build.
    #[must_use]
    pub fn launcher(self) -> &'static str {
        match self {
            Self::Stable => "code",
            Self::Insiders => "code-insiders",
        }
    }
}

/// Build the launch URL for `payload`.
///
/// # Errors
///
/// Returns `LaunchError::InvalidPayload` if the payload cannot be encoded.
pub fn launch_url(scheme: Scheme, payload: &DebugPayload) -> Result<String, LaunchError> {
    let encoded = payload.encode()?;
    Ok(format!(
        "{}://{AUTHORITY}{LAUNCH_PATH}?{PAYLOAD_KEY}={encoded}",
        scheme.as_str()
    ))
}

/// Extract the raw `payload` query value from a launch URL.
#[must_use]
pub fn payload_param(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(PAYLOAD_KEY)?.strip_prefix('='))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> DebugPayload {
        DebugPayload::new("/bin/echo".to_owned(), vec!["hi".to_owned()], "/tmp".to_owned())
    }

    #[test]
    fn test_stable_url_prefix() {
        let url = launch_url(Scheme::Stable, &payload()).unwrap();
        assert!(url.starts_with("vscode://bradphelan.code-dbg/launch?payload="));
        assert!(!url.starts_with("vscode-insiders://"));
    }

    #[test]
    fn test_insiders_url_prefix() {
        let url = launch_url(Scheme::Insiders, &payload()).unwrap();
        assert!(url.starts_with("vscode-insiders://bradphelan.code-dbg/launch?payload="));
    }

    #[test]
    fn test_scheme_selects_launcher() {
        assert_eq!(Scheme::from_insiders(false).launcher(), "code");
        assert_eq!(Scheme::from_insiders(true).launcher(), "code-insiders");
    }

    #[test]
    fn test_payload_param_round_trip() {
        let url = launch_url(Scheme::Stable, &payload()).unwrap();
        let encoded = payload_param(&url).unwrap();
        assert_eq!(DebugPayload::decode(encoded).unwrap(), payload());
    }

    #[test]
    fn test_payload_param_missing() {
        assert_eq!(payload_param("vscode://bradphelan.code-dbg/launch"), None);
        assert_eq!(payload_param("vscode://x/launch?other=1"), None);
        assert_eq!(payload_param("vscode://x/launch?a=1&payload=abc="), Some("abc="));
    }
}
