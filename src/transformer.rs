//! Line transformer: read a line, resolve its identifier, write a record.
//!
//! The loop runs until the reader reports end of input. An identifier missing
//! from the catalog stops the loop; whatever was written before it is flushed
//! and kept.

use std::io::{BufRead, Write};

use crate::catalog::Catalog;
use crate::error::RecordError;
use crate::identifier::{extract_identifier, trim_line_ending};
use crate::record::{EmitMode, ItemRecord};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Lines read, including the one that failed (if any)
    pub lines_read: usize,
    pub records_written: usize,
}

/// Converts input lines into records using a catalog
pub struct LineTransformer<'c> {
    catalog: &'c Catalog,
    mode: EmitMode,
}

impl<'c> LineTransformer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            mode: EmitMode::default(),
        }
    }

    /// Select the template written for each line
    pub fn with_mode(mut self, mode: EmitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Resolve one line (without its terminator) into a record
    pub fn resolve<'l>(&self, line: &'l str, line_number: usize) -> Result<ItemRecord<'l>, RecordError>
    where
        'c: 'l,
    {
        let id = extract_identifier(line);
        let description = self
            .catalog
            .description(id)
            .ok_or_else(|| RecordError::UnknownIdentifier {
                id: id.to_string(),
                line: line_number,
            })?;

        Ok(ItemRecord::new(id, description))
    }

    /// Process `input` until end of input, writing records to `output`
    ///
    /// # Errors
    ///
    /// * `RecordError::UnknownIdentifier` - a line's identifier is not in the catalog
    /// * `RecordError::Io` - reading or writing failed, including non-UTF-8 input
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<RunSummary, RecordError> {
        let mut summary = RunSummary::default();
        let mut buffer = String::new();

        loop {
            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                break;
            }
            summary.lines_read += 1;

            let line = trim_line_ending(&buffer);
            let record = match self.resolve(line, summary.lines_read) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(line = summary.lines_read, input = line, "identifier not in catalog");
                    output.flush()?;
                    return Err(e);
                }
            };

            record.write_to(&mut output, self.mode)?;
            summary.records_written += 1;
            tracing::debug!(id = record.id, line = summary.lines_read, "record written");
        }

        output.flush()?;
        tracing::info!(
            lines = summary.lines_read,
            records = summary.records_written,
            "end of input"
        );

        Ok(summary)
    }
}
