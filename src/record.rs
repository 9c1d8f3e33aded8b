//! Output templates.
//!
//! A record is written as a RON tuple entry of the item definition asset:
//!
//! ```text
//!
//!         (((1, 1)), (
//!             id: Wheat,
//!             name: "Wheat",
//!             description: "Wheat",
//!             texture_id: Wheat,
//!         )),
//! ```
//!
//! Each record opens with a newline and ends right after `)),`, so
//! consecutive records are separated by a blank line.

use std::fmt;
use std::io::{self, Write};

/// Which template the transformer renders for each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitMode {
    /// Item definition record
    #[default]
    Record,
    /// `"id": "description",` line for the hardcoded catalog table
    CatalogEntry,
}

/// One resolved input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRecord<'a> {
    pub id: &'a str,
    pub description: &'a str,
}

impl<'a> ItemRecord<'a> {
    pub fn new(id: &'a str, description: &'a str) -> Self {
        Self { id, description }
    }

    /// Write the record in the given mode
    pub fn write_to<W: Write>(&self, out: &mut W, mode: EmitMode) -> io::Result<()> {
        match mode {
            EmitMode::Record => write!(out, "{}", self),
            EmitMode::CatalogEntry => writeln!(out, "\"{}\": \"{}\",", self.id, self.description),
        }
    }
}

impl fmt::Display for ItemRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "        (((1, 1)), (")?;
        writeln!(f, "            id: {},", self.id)?;
        writeln!(f, "            name: \"{}\",", self.id)?;
        writeln!(f, "            description: \"{}\",", self.description)?;
        writeln!(f, "            texture_id: {},", self.id)?;
        write!(f, "        )),")
    }
}
