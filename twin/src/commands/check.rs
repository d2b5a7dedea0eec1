use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use twin_codegen_java::JavaGenerator;

use super::load;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to twin.toml (defaults to ./twin.toml)
    #[arg(short, long, default_value = "twin.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (twin_toml, model) = load(&self.config);
        let report = ops::check(twin_toml.manifest(), &model, &JavaGenerator, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
