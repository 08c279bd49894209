//! Column projection from card records to a rectangular table.
//!
//! Card records are free-form JSON objects, and different cards carry
//! different keys (`arena_id` only exists for Arena cards, `card_faces` only
//! for multi-faced cards, and so on). A [`Table`] gives them a fixed column
//! list. Cells are empty wherever a record lacks the column's key.

use std::collections::HashSet;

use serde_json::Value;

use crate::search::CardRecord;

/// Which fields end up as columns in the export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportSpec {
    /// Every field seen in the data.
    #[default]
    All,
    /// Exactly these fields, in this order.
    Include(Vec<String>),
    /// Every field seen in the data except these.
    Exclude(Vec<String>),
}

impl ExportSpec {
    /// Builds a spec from selection and deselection lists.
    ///
    /// A non-empty selection wins and the deselection is ignored. With an
    /// empty selection, a non-empty deselection excludes fields. With both
    /// empty, every field is kept.
    pub fn from_lists(select: Vec<String>, deselect: Vec<String>) -> Self {
        if !select.is_empty() {
            ExportSpec::Include(select)
        } else if !deselect.is_empty() {
            ExportSpec::Exclude(deselect)
        } else {
            ExportSpec::All
        }
    }

    /// Resolves the spec against actual records into a column list.
    pub fn resolve_columns(&self, records: &[CardRecord]) -> Vec<String> {
        match self {
            ExportSpec::Include(fields) => fields.clone(),
            ExportSpec::Exclude(fields) => {
                let excluded: HashSet<&str> = fields.iter().map(String::as_str).collect();
                known_fields(records)
                    .into_iter()
                    .filter(|field| !excluded.contains(field.as_str()))
                    .collect()
            }
            ExportSpec::All => known_fields(records),
        }
    }
}

/// Projected records: one row per record, one cell per column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    /// `None` marks a field the record does not carry.
    pub rows: Vec<Vec<Option<Value>>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cells of the named column, if present.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&Value>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).and_then(Option::as_ref))
                .collect(),
        )
    }
}

/// Returns the union of record keys in first-seen order.
pub fn known_fields(records: &[CardRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                fields.push(key.clone());
            }
        }
    }

    fields
}

/// Narrows records to the columns selected by `spec`.
///
/// Record order is preserved. Naming a field no record has yields an
/// all-empty column.
pub fn project(records: &[CardRecord], spec: &ExportSpec) -> Table {
    let columns = spec.resolve_columns(records);

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).cloned())
                .collect()
        })
        .collect();

    Table { columns, rows }
}
