//! Dagpi CLI main entry point

use clap::Parser;
use dagpi::Client;
use dagpi_cli::{
    cli::{Cli, Commands},
    commands::{DataCommand, FlagsCommand, ImageCommand, ListCommand},
    error::CliResult,
    utils::{build_client_config, init_tracing, ColoredOutput},
};
use tracing::info;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", ColoredOutput::error("Error:"), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    // Disable colored output if requested
    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("Dagpi CLI v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::List { kind, format } => ListCommand::run(kind.map(Into::into), *format),

        Commands::Flags => {
            FlagsCommand::run();
            Ok(())
        }

        Commands::Data {
            name,
            params,
            format,
            output,
        } => {
            let client = Client::with_config(build_client_config(&cli)?)?;
            DataCommand::run(&client, name, params, *format, output.as_deref()).await
        }

        Commands::Image {
            name,
            params,
            output,
        } => {
            let client = Client::with_config(build_client_config(&cli)?)?;
            ImageCommand::run(&client, name, params, output).await
        }
    }
}
