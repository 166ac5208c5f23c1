mod compile;
mod completions;
mod inspect;

use clap::{Parser, Subcommand};
use compile::CompileCommand;
use completions::CompletionsCommand;
use eyre::Result;
use inspect::InspectCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for scadkit_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "scadkit")]
#[command(version)]
#[command(about = "Compile OpenSCAD sources and inspect the resulting meshes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Compile(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an OpenSCAD file with the configured compiler
    Compile(CompileCommand),

    /// Summarize an STL mesh
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compile() {
        let cli =
            Cli::try_parse_from(["scadkit", "compile", "part.scad", "-o", "part.stl"]).unwrap();
        match cli.command {
            Commands::Compile(cmd) => {
                assert_eq!(cmd.source.to_str(), Some("part.scad"));
                assert_eq!(
                    cmd.output.as_deref().and_then(|p| p.to_str()),
                    Some("part.stl")
                );
                assert_eq!(cmd.config.to_str(), Some("scadkit.toml"));
            }
            _ => panic!("expected compile command"),
        }
    }

    #[test]
    fn test_parse_inspect_json() {
        let cli = Cli::try_parse_from(["scadkit", "inspect", "part.stl", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Inspect(ref cmd) if cmd.json));
    }
}
