use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use penguinui_constants::{BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, REPOSITORY_URL, VERSION};

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<()> {
        match command {
            Some(cmd) => Self::show_command_help(cmd),
            None => {
                Self::show_custom_help();
                Ok(())
            }
        }
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cli = Cli::command();

        // Aliases resolve too, so `help rm` shows `remove`.
        let name = resolve_command(command);
        match name.and_then(|n| cli.find_subcommand_mut(n)) {
            Some(subcommand) => subcommand.print_help()?,
            None => {
                println!(
                    "{}: Unknown command '{}'",
                    "Error".bright_red().bold(),
                    command
                );
                println!();
                Self::show_custom_help();
            }
        }

        println!();
        Ok(())
    }

    fn show_custom_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "<COMMAND>".bright_white(),
            "<OPTIONS>".bright_black().bold(),
            "[ARGS]".bright_black().bold()
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let width = COMMANDS
            .iter()
            .map(|(cmd, _, aliases)| cmd.len() + alias_suffix(aliases).len())
            .max()
            .unwrap_or(0);

        for (cmd, desc, aliases) in COMMANDS {
            let aliases = alias_suffix(aliases);
            let padding = " ".repeat(width - cmd.len() - aliases.len());
            println!(
                "  {}{}{padding}  # {}",
                cmd.bright_cyan().bold(),
                aliases.bright_black().bold(),
                desc.bright_black().bold()
            );
        }
        println!();

        println!("{}", "Options:".bright_magenta().bold());
        for (flag, desc) in [
            ("-q, --quiet", "Only print errors"),
            ("-V, --version", "Print version"),
        ] {
            let padding = " ".repeat(15usize.saturating_sub(flag.len()));
            println!(
                "  {}{padding}  # {}",
                flag.bright_cyan().bold(),
                desc.bright_black().bold()
            );
        }
        println!();

        Self::show_examples();
    }

    fn show_examples() {
        println!("{}", "Examples:".bright_magenta().bold());

        let width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
        for (cmd, desc) in EXAMPLES {
            let padding = " ".repeat(width - cmd.len());
            println!(
                "  {}{padding}  # {}",
                colorize_example(cmd),
                desc.bright_black().bold()
            );
        }

        println!();
        println!(
            "{}",
            "For more information about a specific command, use:".bright_magenta()
        );
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "help".bright_white(),
            "<command>".bright_black().bold()
        );
        println!();
        println!(
            "Visit {} for more information",
            REPOSITORY_URL.bright_cyan().underline()
        );
    }
}

fn alias_suffix(aliases: &[&str]) -> String {
    if aliases.is_empty() {
        String::new()
    } else {
        format!(" [{}]", aliases.join(", "))
    }
}

fn resolve_command(command: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|(name, _, aliases)| *name == command || aliases.contains(&command))
        .map(|(name, _, _)| *name)
}

/// Binary name in cyan, flags dimmed, everything else white.
fn colorize_example(cmd: &str) -> String {
    cmd.split_whitespace()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.bright_cyan().bold().to_string()
            } else if part.starts_with('-') {
                part.bright_black().bold().to_string()
            } else {
                part.bright_white().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
