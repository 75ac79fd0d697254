//! Binary entrypoint for the `scaffold` CLI.

use std::process::ExitCode;

use scaffold::RunError;

fn main() -> ExitCode {
    // Loaded before logging so a project-local .env can set SCAFFOLD_LOG.
    let dotenv = dotenvy::dotenv();
    scaffold::logging::init();
    if let Err(err) = dotenv {
        if !err.not_found() {
            tracing::warn!(error = %err, "ignoring unreadable .env");
        }
    }

    match scaffold::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Usage(message)) => {
            eprintln!("{}", message.trim_end());
            ExitCode::FAILURE
        }
        Err(RunError::Command(line)) => {
            println!("{line}");
            ExitCode::FAILURE
        }
    }
}
