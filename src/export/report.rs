//! Export report types.
//!
//! Summarizes a finished export for the CLI, either as text or as JSON,
//! similar to how conversion tools report what they did.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What an export run did.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ExportReport {
    /// The search query as given.
    pub query: String,
    /// Result count reported by the server.
    pub total_cards: u64,
    /// Records actually downloaded.
    pub records: usize,
    /// Pages fetched.
    pub pages: usize,
    /// Records whose image_uris was copied from their front face.
    pub repaired: usize,
    /// Columns written, in order.
    pub columns: Vec<String>,
    /// Where the file was written.
    pub output: PathBuf,
    /// Field separator used.
    pub separator: String,
}

impl ExportReport {
    /// True when the download matched the server-reported total.
    pub fn is_complete(&self) -> bool {
        self.records as u64 == self.total_cards
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exported search '{}':", self.query)?;
        writeln!(
            f,
            "  {} of {} result(s) in {} page(s)",
            self.records, self.total_cards, self.pages
        )?;
        if self.repaired > 0 {
            writeln!(
                f,
                "  {} double-faced card(s) took their front face image",
                self.repaired
            )?;
        }
        writeln!(
            f,
            "  {} column(s): {}",
            self.columns.len(),
            self.columns.join(", ")
        )?;
        writeln!(
            f,
            "  written to {} (separator '{}')",
            self.output.display(),
            self.separator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ExportReport {
        ExportReport {
            query: "game:Arena".into(),
            total_cards: 5,
            records: 5,
            pages: 3,
            repaired: 1,
            columns: vec!["name".into(), "rarity".into()],
            output: PathBuf::from("output.csv"),
            separator: ";".into(),
        }
    }

    #[test]
    fn display_lists_counts_and_columns() {
        let text = report().to_string();
        assert!(text.contains("Exported search 'game:Arena'"));
        assert!(text.contains("5 of 5 result(s) in 3 page(s)"));
        assert!(text.contains("1 double-faced card(s)"));
        assert!(text.contains("2 column(s): name, rarity"));
        assert!(text.contains("output.csv"));
    }

    #[test]
    fn display_omits_repair_line_when_nothing_repaired() {
        let mut report = report();
        report.repaired = 0;
        assert!(!report.to_string().contains("double-faced"));
    }

    #[test]
    fn serializes_to_json() {
        let value = serde_json::to_value(report()).expect("serialize");
        assert_eq!(value["records"], 5);
        assert_eq!(value["columns"][1], "rarity");
        assert_eq!(value["separator"], ";");
        assert!(report().is_complete());
    }
}
