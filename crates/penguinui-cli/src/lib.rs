pub mod commands;
pub mod handlers;

use clap::Parser;
use penguinui_error::PenguinError;

use commands::{Cli, Commands};
use handlers::{
    AddHandler, BuildHandler, GenerateHandler, HelpHandler, ListHandler, RemoveHandler,
};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    penguinui_logger::init_logger(cli.quiet);

    let Some(command) = cli.command else {
        return HelpHandler::handle_help(None);
    };

    match command {
        Commands::Build {
            input,
            out,
            packages,
            experimental,
            debug,
        } => BuildHandler::handle_build(&input, out.as_deref(), packages, experimental, debug),
        Commands::Add {
            url,
            packages,
            debug,
        } => AddHandler::handle_add(&url, &packages, debug),
        Commands::List { packages } => ListHandler::handle_list(&packages),
        Commands::Remove { name, packages } => {
            RemoveHandler::handle_remove(name.as_deref(), &packages)
        }
        Commands::Generate { paths, out, debug } => {
            GenerateHandler::handle_generate(&paths, &out, debug)
        }
        Commands::Help { command } => HelpHandler::handle_help(command.as_deref()),
    }
}

/// Logs a failed command and returns the exit code to leave with.
///
/// Finding nothing to generate is logged as a warning; it still exits non-zero.
pub fn report_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PenguinError>() {
        Some(e @ PenguinError::NoPackagesGenerated) => {
            penguinui_logger::warn(&e.to_string());
            e.exit_code()
        }
        Some(e) => {
            penguinui_logger::error(&e.to_string());
            e.exit_code()
        }
        None => {
            penguinui_logger::error(&err.to_string());
            1
        }
    }
}
