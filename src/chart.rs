//! Text bar charts for distribution reporting.

const BAR_WIDTH: usize = 40;

/// One renderable chart row: category label, count, and share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Renders a titled horizontal bar chart.
///
/// Bars are scaled so the largest count fills the full width; zero-count
/// categories still get a labeled, empty bar. Percent labels follow each
/// bar the way the original bar chart annotated its columns.
pub fn bar_chart(title: &str, rows: &[ChartRow]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');

    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let max_count = rows.iter().map(|r| r.count).max().unwrap_or(0);

    for row in rows {
        let bar_len = if max_count == 0 {
            0
        } else {
            // Round up so any non-zero count draws at least one mark
            (row.count * BAR_WIDTH).div_ceil(max_count)
        };

        out.push_str(&format!(
            "{:<label_width$} |{:<BAR_WIDTH$} {} ({:.1}%)\n",
            row.label,
            "#".repeat(bar_len),
            row.count,
            row.percent,
        ));
    }

    out
}
