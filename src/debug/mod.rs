/// Debug launch domain layer: payload, URL format, path rules, errors.
pub mod errors;
pub mod paths;
pub mod payload;
pub mod url;

pub use errors::LaunchError;
pub use paths::{resolve_cwd, resolve_exe};
pub use payload::DebugPayload;
pub use url::{Scheme, launch_url, payload_param};
