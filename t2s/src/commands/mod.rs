mod check;
mod completions;
mod generate;
mod query;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use query::QueryCommand;
use table2struct_mapping::{CONFIG_FILE, Config, GenerateConfig, MappingStore, NullableMode};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for table2struct_mapping::Result<T> {
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

impl<T> UnwrapOrExit<T> for table2struct_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "table2struct")]
#[command(version)]
#[command(about = "Generate Go structs from MySQL tables")]
pub(crate) struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Query(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one Go file per table
    Generate(GenerateCommand),

    /// Show the identifier and type a column would get
    Query(QueryCommand),

    /// Validate table2struct.toml and mappings without connecting
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags that change how names and types are resolved.
#[derive(Args, Debug, Default)]
pub struct ResolutionArgs {
    /// Map every integer column to int64
    #[arg(long)]
    pub int64: bool,

    /// Keep unsigned integer columns signed
    #[arg(long)]
    pub signed: bool,

    /// Wrapper family for nullable columns: none, std or ext
    #[arg(long, value_name = "MODE")]
    pub nullable: Option<NullableMode>,

    /// Leave unknown SQL types empty instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// File with one mapping spec per line
    #[arg(long, value_name = "PATH")]
    pub mapping_file: Option<PathBuf>,

    /// Mapping spec, e.g. 'orders.qty:Quantity,type:int32' (repeatable)
    #[arg(short, long = "map", value_name = "SPEC")]
    pub mappings: Vec<String>,
}

impl ResolutionArgs {
    /// Override config values with the flags that were given.
    pub fn apply(&self, config: &mut GenerateConfig) {
        if self.int64 {
            config.int64 = true;
        }
        if self.signed {
            config.unsigned = false;
        }
        if let Some(nullable) = self.nullable {
            config.nullable = nullable;
        }
        if self.lenient {
            config.strict = false;
        }
        if let Some(path) = &self.mapping_file {
            config.mapping_file = Some(path.clone());
        }
        config.mappings.extend(self.mappings.iter().cloned());
    }
}

/// Load the config file.
///
/// Without an explicit path, `table2struct.toml` is read when present and the
/// built-in defaults are used otherwise.
fn load_config(path: Option<&Path>) -> (Config, Option<PathBuf>) {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None if Path::new(CONFIG_FILE).exists() => PathBuf::from(CONFIG_FILE),
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            return (Config::default(), None);
        }
    };

    tracing::info!(path = %path.display(), "reading config");
    (Config::from_file(&path).unwrap_or_exit(), Some(path))
}

/// Build the mapping store: mapping file first, then inline specs.
fn load_mappings(config: &GenerateConfig) -> MappingStore {
    let mut store = MappingStore::new();
    if let Some(path) = &config.mapping_file {
        store.load_file(path).unwrap_or_exit();
    }
    store.load(&config.mappings).unwrap_or_exit();
    tracing::debug!(mappings = store.len(), "loaded mappings");
    store
}
