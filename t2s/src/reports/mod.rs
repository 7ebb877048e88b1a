//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`] target.

mod check;
mod generate;
mod output;
mod query;

pub use check::CheckReport;
pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, TableSummary, WrittenResult,
};
pub use output::{Report, TerminalOutput};
pub use query::QueryReport;

#[cfg(test)]
pub use output::BufferOutput;
