//! The search-to-file export pipeline.
//!
//! One run is strictly linear: fetch every page, repair double-faced card
//! images, project the requested columns, write the file. The output file is
//! only created once the download and repair have succeeded, so a failed
//! request never leaves a partial export behind.

pub mod report;

pub use report::ExportReport;

use std::path::PathBuf;

use crate::csv_out::{self, Separator};
use crate::error::ScrycsvError;
use crate::repair;
use crate::search::{self, FetchProgress, PageSource, DEFAULT_ENDPOINT};
use crate::table::{self, ExportSpec};

/// Fields exported when the caller does not choose any.
pub const DEFAULT_FIELDS: &[&str] = &[
    "name",
    "rarity",
    "set",
    "set_name",
    "booster",
    "arena_id",
    "foil",
    "image_uris",
];

/// Returns a fresh [`ExportSpec`] for [`DEFAULT_FIELDS`].
pub fn default_spec() -> ExportSpec {
    ExportSpec::Include(DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect())
}

/// Resolves command-line field choices into an [`ExportSpec`].
///
/// With no lists and no `all_fields`, the [`DEFAULT_FIELDS`] apply.
/// `all_fields` only switches that default off; any lists given alongside it
/// still go through [`ExportSpec::from_lists`].
pub fn resolve_spec(select: Vec<String>, deselect: Vec<String>, all_fields: bool) -> ExportSpec {
    if !all_fields && select.is_empty() && deselect.is_empty() {
        default_spec()
    } else {
        ExportSpec::from_lists(select, deselect)
    }
}

/// Everything one export run needs.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Search endpoint; the query is appended as `q`.
    pub endpoint: String,
    pub query: String,
    pub output: PathBuf,
    pub spec: ExportSpec,
    pub separator: Separator,
    /// Copy front-face images into double-faced cards before export.
    pub repair: bool,
}

impl ExportOptions {
    /// Options for `query` against the public API with default fields.
    pub fn new(query: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query: query.into(),
            output: output.into(),
            spec: default_spec(),
            separator: Separator::default(),
            repair: true,
        }
    }
}

/// Runs a full export and reports what was written.
///
/// # Errors
/// Fails on the first transport, repair, or I/O error. Transport and repair
/// errors happen before the output file is touched.
pub fn export_search<S>(
    source: &mut S,
    options: &ExportOptions,
    progress: &mut dyn FetchProgress,
) -> Result<ExportReport, ScrycsvError>
where
    S: PageSource + ?Sized,
{
    let mut results = search::fetch_all(source, &options.endpoint, &options.query, progress)?;

    let repaired = if options.repair {
        repair::repair_image_uris(&mut results.records)?
    } else {
        0
    };

    tracing::info!("Finished download. Writing CSV file...");

    let table = table::project(&results.records, &options.spec);
    csv_out::write_csv(&options.output, &table, options.separator)?;

    Ok(ExportReport {
        query: options.query.clone(),
        total_cards: results.total_cards,
        records: results.len(),
        pages: results.pages,
        repaired,
        columns: table.columns,
        output: options.output.clone(),
        separator: options.separator.to_string(),
    })
}
