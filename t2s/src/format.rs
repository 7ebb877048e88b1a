//! `gofmt` pass over generated files.

use std::{
    cell::Cell,
    io::{ErrorKind, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use eyre::{Context, Result, bail};
use table2struct_core::OutputFile;

/// Pipes source through `gofmt` (stdin to stdout).
///
/// A missing binary is not an error: the file is returned unformatted and a
/// warning is logged once.
#[derive(Debug)]
pub struct Gofmt {
    program: PathBuf,
    missing: Cell<bool>,
}

impl Gofmt {
    pub fn new() -> Self {
        Self::with_program("gofmt")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            missing: Cell::new(false),
        }
    }

    /// Whether the binary was found missing during this run.
    pub fn is_missing(&self) -> bool {
        self.missing.get()
    }

    pub fn format(&self, file: OutputFile) -> Result<OutputFile> {
        if self.missing.get() {
            return Ok(file);
        }

        let spawned = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    program = %self.program.display(),
                    "formatter not found, writing unformatted source"
                );
                self.missing.set(true);
                return Ok(file);
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("failed to run {}", self.program.display())
                });
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            // An early exit surfaces through the status below.
            match stdin.write_all(file.content().as_bytes()) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                    return Err(e).wrap_err("failed to send source to formatter");
                }
                _ => {}
            }
        }

        let output = child
            .wait_with_output()
            .wrap_err_with(|| format!("failed to run {}", self.program.display()))?;
        if !output.status.success() {
            bail!(
                "{} rejected {}: {}",
                self.program.display(),
                file.path().display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let formatted = String::from_utf8(output.stdout)
            .wrap_err("formatter produced invalid UTF-8")?;
        tracing::debug!(path = %file.path().display(), "formatted");
        Ok(file.with_content(formatted))
    }
}

impl Default for Gofmt {
    fn default() -> Self {
        Self::new()
    }
}
