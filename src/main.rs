use std::process::ExitCode;

use clap::Parser;
use weekend_days::cli::{self, Cli, USAGE};
use weekend_days::logging;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.verbose);

    match cli::execute(&args.start, &args.end) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::info!("{err}");
            println!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
