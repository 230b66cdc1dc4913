mod cli;
mod config;
mod domain;
mod handlers;
mod infrastructure;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::{forwarded_read_args, Cli, Commands};
use domain::Ui;
use handlers::{handle_completion, handle_config, ReadCommand};
use infrastructure::{ConsoleUi, EnvironmentProvider, SecretFormatter};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let cli = Cli::parse_from(&argv);
    let mut ui = ConsoleUi::console();
    let provider = EnvironmentProvider::new();

    let code = match cli.command {
        Commands::Read { args } => {
            let forwarded = forwarded_read_args(&argv);
            tracing::debug!(?args, ?forwarded, "Dispatching read");
            ReadCommand::new(&provider, &SecretFormatter).run(&mut ui, forwarded)
        }
        Commands::Config => report(handle_config(&provider, &mut ui), &mut ui),
        Commands::Completion { shell } => report(handle_completion(&shell), &mut ui),
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn report(result: anyhow::Result<()>, ui: &mut dyn Ui) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            1
        }
    }
}
