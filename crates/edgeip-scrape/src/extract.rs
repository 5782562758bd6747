//! Per-site HTML table extraction.

use edgeip_core::{latency_text, ScoredRecord, Site};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Read a site's result table out of a fetched page.
///
/// Rows with fewer cells than the site's minimum, and rows whose latency
/// cell has no numeric prefix, are skipped without comment; dirty rows are
/// normal in these tables (headers, ads, placeholders).
#[must_use]
pub fn extract_records(site: Site, html: &str) -> Vec<ScoredRecord> {
    let rule = site.rule();
    let document = Html::parse_document(html);

    // Rules only carry selectors known to parse
    let Ok(row_selector) = Selector::parse(rule.row_selector) else {
        return Vec::new();
    };
    let Ok(td) = Selector::parse("td") else {
        return Vec::new();
    };

    let mut records = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row.select(&td).map(cell_text).collect();
        if cells.len() < rule.min_columns {
            continue;
        }

        let Some(latency) = latency_text(&cells[rule.latency_col]) else {
            continue;
        };

        let label = rule.label_col.map(|col| cells[col].clone());
        records.push(ScoredRecord::new(&cells[rule.ip_col], label, latency));
    }

    debug!(?site, count = records.len(), "extracted records");
    records
}
