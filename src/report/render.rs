//! Markdown and CSV output for pitch reports

use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::path::Path;

use super::{PitchReport, SectionBody};
use crate::error::PitchError;
use crate::market::MarketSizeEstimate;
use crate::projection::ProjectionTable;

/// Column headers shared by the Markdown table and the CSV export
pub const PROJECTION_COLUMNS: [&str; 7] = [
    "Month",
    "Users",
    "Revenue",
    "COGS",
    "Gross Profit",
    "OPEX (Fixed)",
    "Net Profit",
];

/// Whole-dollar amount with thousands separators, e.g. `$24,500,000`
pub fn format_whole_dollars(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// One-line TAM / SAM / SOM summary
pub fn market_line(estimate: &MarketSizeEstimate) -> String {
    format!(
        "**TAM**: {}  |  **SAM**: {}  |  **SOM**: {}",
        format_whole_dollars(estimate.tam),
        format_whole_dollars(estimate.sam),
        format_whole_dollars(estimate.som)
    )
}

/// Projection as a Markdown table followed by an assumptions caption
pub fn projection_markdown(table: &ProjectionTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "| {} |", PROJECTION_COLUMNS.join(" | "));
    let _ = writeln!(out, "|{}", "---:|".repeat(PROJECTION_COLUMNS.len()));
    for row in &table.rows {
        let _ = writeln!(
            out,
            "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |",
            row.month, row.users, row.revenue, row.cogs, row.gross_profit, row.opex, row.net_profit
        );
    }

    let a = &table.assumptions;
    let _ = write!(
        out,
        "\n_Assumptions: {} starting users, {:.1}% monthly growth, ARPU {:.2}, COGS {:.1}% of revenue, fixed OPEX {:.2}/month._",
        a.base_users,
        a.monthly_growth * 100.0,
        a.arpu,
        a.cogs_pct * 100.0,
        a.opex
    );

    let summary = table.summary();
    match summary.break_even_month {
        Some(month) => {
            let _ = write!(out, "\n_Break-even in month {}._", month);
        }
        None if !table.is_empty() => {
            let _ = write!(out, "\n_No break-even within {} months._", summary.total_months);
        }
        None => {}
    }
    out
}

/// Render the whole report as Markdown
pub fn render_markdown(report: &PitchReport) -> String {
    let mut out = String::from("# Startup Pitch Polisher\n\n");
    let _ = writeln!(
        out,
        "_Generated {} with {}_",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.model
    );

    for section in &report.sections {
        let _ = write!(out, "\n### {}\n\n", section.title);
        match &section.body {
            SectionBody::Text(text) => out.push_str(text.trim_end()),
            SectionBody::Projection(table) => out.push_str(&projection_markdown(table)),
            SectionBody::Market(estimate) => out.push_str(&market_line(estimate)),
            SectionBody::Failed(message) => {
                let _ = write!(out, "_Generation failed: {}_", message);
            }
        }
        out.push('\n');
    }
    out
}

/// Write the projection table as CSV
pub fn write_projection_csv<W: io::Write>(writer: W, table: &ProjectionTable) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(PROJECTION_COLUMNS)?;
    for row in &table.rows {
        wtr.write_record(&[
            row.month.to_string(),
            row.users.to_string(),
            format!("{:.2}", row.revenue),
            format!("{:.2}", row.cogs),
            format!("{:.2}", row.gross_profit),
            format!("{:.2}", row.opex),
            format!("{:.2}", row.net_profit),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_projection_csv_file(path: &Path, table: &ProjectionTable) -> Result<(), PitchError> {
    let file = File::create(path)?;
    write_projection_csv(file, table)?;
    log::info!("projection written to {}", path.display());
    Ok(())
}
