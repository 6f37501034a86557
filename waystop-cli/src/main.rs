//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use waystop_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    match waystop_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("waystop: {err}");
            std::process::exit(1);
        }
    }
}
