//! Report rendering and terminal progress output

pub mod progress;

use crate::aggregate::RepositorySizeSummary;
use crate::common::human_size;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ColumnConstraint, ContentArrangement, Table};
use std::cmp::Reverse;

pub use progress::IndicatifProgress;

const HEADER: [&str; 5] = ["#", "Repository", "CountTags", "Size", "SizeInt"];
/// Raw byte column, used only as the sort key
const SIZE_INT_COLUMN: usize = 4;

/// Row order of the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest repository first
    Ascending,
    /// Largest repository first
    Descending,
    /// Aggregation order
    #[default]
    None,
}

impl SortOrder {
    /// Ascending wins when both flags are set
    pub fn from_flags(sort_asc: bool, sort_dsc: bool) -> Self {
        if sort_asc {
            SortOrder::Ascending
        } else if sort_dsc {
            SortOrder::Descending
        } else {
            SortOrder::None
        }
    }
}

/// Render the size table for `project`.
///
/// Rows keep their aggregation index in the `#` column even when sorted. The
/// last row totals the repositories listed and their combined size.
pub fn render_report(
    project: &str,
    summaries: &[RepositorySizeSummary],
    sort: SortOrder,
) -> String {
    let mut rows: Vec<(usize, &RepositorySizeSummary)> = summaries.iter().enumerate().collect();
    match sort {
        SortOrder::Ascending => rows.sort_by_key(|(_, summary)| summary.total_size_bytes),
        SortOrder::Descending => rows.sort_by_key(|(_, summary)| Reverse(summary.total_size_bytes)),
        SortOrder::None => {}
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADER.to_vec());

    for (index, summary) in rows {
        table.add_row(vec![
            index.to_string(),
            summary.repository_name.clone(),
            summary.tag_count.to_string(),
            human_size(summary.total_size_bytes),
            summary.total_size_bytes.to_string(),
        ]);
    }

    let total: i64 = summaries
        .iter()
        .map(|summary| summary.total_size_bytes)
        .sum();
    table.add_row(vec![
        "ArtifactsCount".to_string(),
        summaries.len().to_string(),
        "TotalSize".to_string(),
        human_size(total),
        String::new(),
    ]);

    if let Some(column) = table.column_mut(SIZE_INT_COLUMN) {
        column.set_constraint(ColumnConstraint::Hidden);
    }

    format!(
        "Harbor artifacts size of project - {}\n{}",
        project, table
    )
}
