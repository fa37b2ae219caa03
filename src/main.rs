use std::process::ExitCode;
use clap::Parser;
use quantia::errors::ErrorHandler;
use quantia::structs::cli::Cli;
use quantia::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    quantia::logger::init(&cli.log_level);

    let mut runner = CommandRunner::new(cli.config);
    match runner.run_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
