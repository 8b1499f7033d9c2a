#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! code-dbg — launch the VS Code debugger from the terminal without a launch.json.

mod cli;
mod commands;
mod debug;
mod opener;

use cli::{OutputCtx, parse_invocation, write_error};
use debug::Scheme;

fn main() {
    let result = parse_invocation(std::env::args_os()).and_then(|invocation| {
        let ctx = OutputCtx::new(invocation.options.debug);
        let opener = opener::for_platform(Scheme::from_insiders(invocation.options.insiders));
        commands::launch::run(
            &invocation,
            std::env::current_dir,
            opener.as_ref(),
            &mut std::io::stdout().lock(),
            &ctx,
        )
    });

    if let Err(err) = result {
        write_error(&mut std::io::stderr().lock(), &err);
        std::process::exit(err.exit_code());
    }
}
