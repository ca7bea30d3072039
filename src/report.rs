use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::ConvertError;

#[derive(Debug)]
pub struct Failure {
    pub source: PathBuf,
    pub error: ConvertError,
}

/// Tally of one batch.
#[derive(Debug, Default)]
pub struct Summary {
    pub total: usize,
    pub converted: usize,
    pub failures: Vec<Failure>,
}

impl Summary {
    pub fn new(total: usize) -> Self {
        Summary {
            total,
            ..Summary::default()
        }
    }

    pub fn record(&mut self, source: PathBuf, result: Result<PathBuf, ConvertError>) {
        match result {
            Ok(_) => self.converted += 1,
            Err(error) => self.failures.push(Failure { source, error }),
        }
    }

    /// A batch with nothing in it is not a success.
    pub fn is_success(&self) -> bool {
        self.total > 0 && self.converted == self.total
    }

    /// Process exit status: 0 when everything converted, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "Conversion completed: {}/{} files converted successfully",
            self.converted, self.total
        )?;
        if self.is_success() {
            writeln!(out, "All SVG files have been successfully converted to PNG!")
        } else {
            writeln!(out, "Some conversions failed. Please check the errors above.")?;
            for failure in &self.failures {
                writeln!(out, "  - {}", file_name(&failure.source))?;
            }
            Ok(())
        }
    }
}

pub(crate) fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
