use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{load_config, load_mappings};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Path to the config file (defaults to ./table2struct.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (config, path) = load_config(self.config.as_deref());
        let store = load_mappings(&config.generate);

        let report = ops::check(&config, path.as_deref(), &store);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
