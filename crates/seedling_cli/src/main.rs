//! `seedling` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, set up logging, run one command, set the exit status.
//! - Keep business rules out of the binary; they live in `seedling_core`.

mod args;
mod commands;

use args::Cli;
use clap::Parser;
use commands::{CliError, EXIT_INTERNAL_ERROR, EXIT_OK};
use log::{error, info};
use seedling_core::{default_log_level, init_logging};

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(message) = init_logging(level, log_dir) {
            eprintln!("error: {message}");
            std::process::exit(EXIT_INTERNAL_ERROR);
        }
    }

    let code = match commands::run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            info!("event=cli_exit module=cli status=ok code={EXIT_OK}");
            EXIT_OK
        }
        Err(err) => report(&err),
    };

    // `process::exit` skips destructors; flush buffered log lines first.
    log::logger().flush();
    std::process::exit(code);
}

fn report(err: &CliError) -> i32 {
    let code = err.exit_code();
    match err {
        CliError::Internal(_) => {
            error!("event=cli_exit module=cli status=error code={code} error={err}")
        }
        _ => info!("event=cli_exit module=cli status=rejected code={code}"),
    }
    eprintln!("error: {err}");
    code
}
