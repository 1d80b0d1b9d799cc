//! Frequency tables: outcome label -> (count, relative frequency).
//!
//! Rows are sorted lexicographically by label so the display order is
//! deterministic regardless of draw order. Absent categories are the
//! caller's concern; the experiments always pass every category they
//! can produce, zero counts included, so absence is unambiguous.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyRow {
    pub outcome:            String,
    pub count:              u64,
    pub relative_frequency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Build a table from per-label counts. Relative frequency is
    /// count/total, or 0 for every row when the total is 0.
    pub fn from_counts(counts: Vec<(String, u64)>) -> Self {
        let total: u64 = counts.iter().map(|(_, c)| c).sum();
        let mut rows: Vec<FrequencyRow> = counts
            .into_iter()
            .map(|(outcome, count)| FrequencyRow {
                outcome,
                count,
                relative_frequency: if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                },
            })
            .collect();
        rows.sort_by(|a, b| a.outcome.cmp(&b.outcome));
        Self { rows }
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn row(&self, outcome: &str) -> Option<&FrequencyRow> {
        self.rows.iter().find(|r| r.outcome == outcome)
    }

    /// Total number of trials behind the table.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// The row with the highest relative frequency.
    /// Ties break toward the earliest row in label order.
    pub fn max_row(&self) -> Option<&FrequencyRow> {
        self.rows
            .iter()
            .reduce(|best, r| if r.count > best.count { r } else { best })
    }
}
