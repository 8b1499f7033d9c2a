/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::parse_invocation;
pub use output::{OutputCtx, write_error};
