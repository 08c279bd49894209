//! Delimited text output for projected tables.
//!
//! # Cell Rendering
//!
//! Every cell becomes one text field:
//! - missing fields and JSON `null` are empty
//! - strings are written as-is
//! - numbers and booleans use their JSON text (`42`, `true`)
//! - objects and arrays (e.g. `image_uris`) are written as compact JSON
//!
//! Quoting is left to the `csv` crate, which only quotes fields that contain
//! the separator, quotes, or line breaks.
//!
//! # Deterministic Output
//!
//! Rendering depends only on the table contents, and object keys keep their
//! response order, so identical search results produce identical files.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::error::ScrycsvError;
use crate::table::Table;

/// A single-byte field separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Separator(u8);

impl Separator {
    pub const SEMICOLON: Separator = Separator(b';');

    /// Parses a separator from user input.
    ///
    /// Accepts exactly one ASCII character other than a quote or line break.
    pub fn parse(input: &str) -> Result<Self, ScrycsvError> {
        let mut chars = input.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(ScrycsvError::InvalidSeparator(format!(
                "'{}' (expected exactly one character)",
                input
            )));
        };

        if !ch.is_ascii() || matches!(ch, '"' | '\n' | '\r') {
            return Err(ScrycsvError::InvalidSeparator(format!(
                "'{}' (must be an ASCII character other than a quote or line break)",
                ch.escape_default()
            )));
        }

        Ok(Separator(ch as u8))
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::SEMICOLON
    }
}

impl FromStr for Separator {
    type Err = ScrycsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Separator::parse(s)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

/// Writes a table to a delimited text file.
///
/// The file is created (or truncated) here and closed before returning.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_csv(path: &Path, table: &Table, separator: Separator) -> Result<(), ScrycsvError> {
    let file = File::create(path).map_err(ScrycsvError::Io)?;
    let writer = BufWriter::new(file);

    let mut csv_writer = write_table(writer, table, separator, path)?;
    csv_writer.flush().map_err(ScrycsvError::Io)?;

    csv_writer
        .into_inner()
        .map_err(|e| ScrycsvError::Io(e.into_error()))?
        .flush()
        .map_err(ScrycsvError::Io)?;

    Ok(())
}

/// Writes a table to a string.
///
/// Useful for testing without file I/O.
pub fn to_csv_string(table: &Table, separator: Separator) -> Result<String, ScrycsvError> {
    let dummy_path = Path::new("<string>");
    let csv_writer = write_table(Vec::new(), table, separator, dummy_path)?;

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| ScrycsvError::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        ScrycsvError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

fn write_table<W: Write>(
    writer: W,
    table: &Table,
    separator: Separator,
    path: &Path,
) -> Result<csv::Writer<W>, ScrycsvError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(separator.as_byte())
        .from_writer(writer);

    let to_error = |source| ScrycsvError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    // A header with no fields would come out as a lone `""` line.
    if table.columns.is_empty() {
        return Ok(csv_writer);
    }

    csv_writer.write_record(&table.columns).map_err(to_error)?;

    for row in &table.rows {
        csv_writer
            .write_record(row.iter().map(|cell| render_cell(cell.as_ref())))
            .map_err(to_error)?;
    }

    Ok(csv_writer)
}

/// Renders one cell as text.
pub fn render_cell(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(value @ (Value::Array(_) | Value::Object(_))) => value.to_string(),
    }
}
