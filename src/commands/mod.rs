/// Command implementations. code-dbg has a single one: launch.
pub mod launch;
