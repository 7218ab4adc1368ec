mod cli;
mod commands;
mod errors;
mod ui;

use clap::Parser;

use cli::{HangarCli, HangarCliCommand};
use errors::CliError;

fn main() {
    let cli = HangarCli::parse();
    initialize_logging(cli.verbose);

    if let Err(error) = run(cli) {
        std::process::exit(error.exit_code());
    }
}

fn run(cli: HangarCli) -> Result<(), CliError> {
    let token = cli.token.as_deref();

    match cli.command {
        HangarCliCommand::Mcp => {
            let catalog = commands::build_catalog(&cli.catalog, token)?;
            let sink = commands::build_sink(&cli.sink, &cli.queue, token);
            commands::serve(catalog, sink)
        }
        HangarCliCommand::Templates => {
            let catalog = commands::build_catalog(&cli.catalog, token)?;
            commands::list_templates(catalog, cli.format)
        }
        HangarCliCommand::Deploy {
            user_id,
            template_id,
            name,
            creds,
        } => {
            let catalog = commands::build_catalog(&cli.catalog, token)?;
            let sink = commands::build_sink(&cli.sink, &cli.queue, token);
            commands::deploy_server(catalog, sink, user_id, template_id, name, &creds, cli.format)
        }
        HangarCliCommand::Delete { server_id } => {
            let sink = commands::build_sink(&cli.sink, &cli.queue, token);
            commands::delete_server(sink, &server_id)
        }
    }
}

/// Logs go to stderr: stdout carries MCP protocol traffic and JSON output.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}
