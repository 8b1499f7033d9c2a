/// The debug payload carried in the launch URL.
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use super::errors::LaunchError;

/// What to debug and where. Field names are part of the URL contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebugPayload {
    /// Executable path: absolute if given as absolute, otherwise verbatim.
    pub exe: String,
    /// Arguments for the executable, in command-line order.
    pub args: Vec<String>,
    /// Absolute working directory.
    pub cwd: String,
}

impl DebugPayload {
    #[must_use]
    pub fn new(exe: String, args: Vec<String>, cwd: String) -> Self {
        Self { exe, args, cwd }
    }

    /// Serialize to compact JSON text.
    ///
    /// Non-ASCII stays as UTF-8 and there are no spaces after `,` / `:`, so
    /// the encoded text differs from Python's `json.dumps` for the same
    /// payload even though both decode to the same value.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::InvalidPayload` if serialization fails.
    pub fn to_json(&self) -> Result<String, LaunchError> {
        serde_json::to_string(self).map_err(|e| LaunchError::InvalidPayload(e.to_string()))
    }

    /// JSON, then standard base64 with padding.
    ///
    /// The standard alphabet is what the extension decodes. Its `+`, `/` and
    /// `=` are left unescaped in the query string.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::InvalidPayload` if serialization fails.
    pub fn encode(&self) -> Result<String, LaunchError> {
        Ok(STANDARD.encode(self.to_json()?))
    }

    /// Inverse of [`DebugPayload::encode`].
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::InvalidPayload` for bad base64, non-UTF-8 bytes,
    /// or JSON that does not have exactly the `exe`, `args`, `cwd` fields.
    pub fn decode(encoded: &str) -> Result<Self, LaunchError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| LaunchError::InvalidPayload(format!("base64: {e}")))?;
        serde_json::from_slice(&bytes).map_err(|e| LaunchError::InvalidPayload(format!("json: {e}")))
    }
}
