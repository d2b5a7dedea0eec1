use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use twin_codegen_java::JavaGenerator;

use super::load;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    /// Path to twin.toml (defaults to ./twin.toml)
    #[arg(short, long, default_value = "twin.toml")]
    pub config: PathBuf,

    /// Only plan these classes (qualified or simple name)
    #[arg(long, value_name = "NAME")]
    pub class: Vec<String>,

    /// Print the synthesized class descriptors as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let (twin_toml, model) = load(&self.config);
        let report = ops::plan(twin_toml.manifest(), &model, &JavaGenerator, &self.class);

        if self.json {
            let json = report.to_json().wrap_err("Failed to serialize the plan")?;
            println!("{json}");
            for failure in &report.failures {
                eprintln!("error: {}", failure.message);
            }
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.failures.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }
}
