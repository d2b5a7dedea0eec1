mod check;
mod completions;
mod generate;
mod plan;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use plan::PlanCommand;
use twin_manifest::TwinToml;
use twin_model::ClassModel;

use crate::logging;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for twin_manifest::Result<T> {
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

/// Open twin.toml and every model file it lists, exiting on the first error.
pub(crate) fn load(config: &Path) -> (TwinToml, ClassModel) {
    let twin_toml = TwinToml::open(config).unwrap_or_exit();
    let model = twin_toml.load_models().unwrap_or_exit();
    tracing::info!(
        config = %config.display(),
        classes = twin_toml.manifest().classes.len(),
        "loaded configuration"
    );
    (twin_toml, model)
}

#[derive(Parser)]
#[command(name = "twin")]
#[command(version)]
#[command(about = "Generate transfer classes and persistence scaffolding from domain models")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); TWIN_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate transfer classes and scaffolding from twin.toml
    Generate(GenerateCommand),

    /// Validate twin.toml and the model without writing files
    Check(CheckCommand),

    /// Show how each field of a class converts
    Plan(PlanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
