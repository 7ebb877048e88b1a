use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use table2struct_codegen::Settings;

use super::{ResolutionArgs, UnwrapOrExit, load_config, load_mappings};
use crate::{
    ops::{self, QueryRequest},
    reports::{Report, TerminalOutput},
};

#[derive(Args, Debug)]
pub struct QueryCommand {
    /// Column or table name to convert
    pub name: String,

    /// Table whose mappings apply (defaults to global mappings only)
    #[arg(short, long)]
    pub table: Option<String>,

    /// SQL column type to resolve as well, e.g. 'int(10) unsigned'
    #[arg(long = "type", value_name = "SQLTYPE")]
    pub sql_type: Option<String>,

    /// Treat the column as nullable
    #[arg(long)]
    pub null: bool,

    /// Path to the config file (defaults to ./table2struct.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub resolution: ResolutionArgs,
}

impl QueryCommand {
    pub fn run(&self) -> Result<()> {
        let (mut config, _) = load_config(self.config.as_deref());
        self.resolution.apply(&mut config.generate);

        let store = load_mappings(&config.generate);
        let settings = Settings::from(&config.generate);

        let report = ops::query(
            &QueryRequest {
                name: &self.name,
                table: self.table.as_deref(),
                sql_type: self.sql_type.as_deref(),
                nullable: self.null,
            },
            &settings,
            &store,
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
