use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use twin_codegen_java::JavaGenerator;

use super::load;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to twin.toml (defaults to ./twin.toml)
    #[arg(short, long, default_value = "twin.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Only generate these classes (qualified or simple name)
    #[arg(long, value_name = "NAME")]
    pub class: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (twin_toml, model) = load(&self.config);
        let options = GenerateOptions {
            output: self.output.clone(),
            dry_run: self.dry_run,
            classes: self.class.clone(),
        };

        let report = ops::generate(twin_toml.manifest(), &model, &JavaGenerator, &options);
        report.render(&mut TerminalOutput::new());

        if report.failed() > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}
