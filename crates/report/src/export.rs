use crate::{ActivityReport, Result};
use csv::WriterBuilder;
use nu_ansi_term::{Color, Style};
use serde::Serialize;
use sunspot_core::histogram::format_hour_label;
use std::fmt::Write as _;
use std::io::Write;

/// Widest bar in the text chart, in characters.
const BAR_WIDTH: u64 = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Text chart for a terminal.
    #[default]
    Table,
    /// Pretty-printed JSON array, one object per address.
    Json,
    /// One row per address and hour.
    Csv,
}

#[derive(Debug, Serialize)]
struct HourRow<'a> {
    address: &'a str,
    hour: usize,
    label: String,
    count: u64,
    in_window: bool,
    slice: usize,
}

pub fn write_reports<W: Write>(
    reports: &[ActivityReport],
    format: ReportFormat,
    colored: bool,
    mut out: W,
) -> Result<()> {
    match format {
        ReportFormat::Table => {
            for report in reports {
                out.write_all(render_table(report, colored).as_bytes())?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, reports)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => write_csv(reports, out)?,
    }
    Ok(())
}

fn write_csv<W: Write>(reports: &[ActivityReport], out: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(out);
    for report in reports {
        let window = &report.selection.window;
        for (hour, count) in report.histogram().iter() {
            writer.serialize(HourRow {
                address: &report.address,
                hour,
                label: format_hour_label(hour),
                count,
                in_window: window.covers(hour),
                slice: report.selection.slice,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Renders one report as a bar chart; hours inside the selected window are highlighted.
pub fn render_table(report: &ActivityReport, colored: bool) -> String {
    let paint = |style: Style, text: &str| -> String {
        if colored {
            style.paint(text).to_string()
        } else {
            text.to_owned()
        }
    };

    let mut out = String::new();
    let window = &report.selection.window;
    let max = report.hourly.max_count.max(1);

    let _ = writeln!(
        out,
        "{}",
        paint(Style::new().bold(), &format!("Transactions vs time (UTC): {}", report.address))
    );
    let _ = writeln!(out, "{}", report.headline());
    if let (Some(earliest), Some(latest)) = (&report.earliest, &report.latest) {
        let _ = writeln!(out, "Between {earliest} and {latest}");
    }
    if report.skipped > 0 {
        let _ = writeln!(out, "{} signatures without a block time were skipped", report.skipped);
    }
    let _ = writeln!(out);

    for (hour, row) in report.hourly.rows.iter().enumerate() {
        let len = (row.count * BAR_WIDTH).div_ceil(max) as usize;
        let bar = "#".repeat(len);
        let (marker, bar) = if window.covers(hour) {
            ("*", paint(Color::Red.normal(), &bar))
        } else {
            (" ", paint(Style::new().dimmed(), &bar))
        };
        let _ = writeln!(out, "{marker} {} {:>6} {bar}", row.label, row.count);
    }

    let _ = writeln!(out);
    if let Some(caption) = report.hourly.peak_caption() {
        let _ = writeln!(out, "{caption}");
    }
    let _ = writeln!(
        out,
        "Best {}h window: {:02}:00-{:02}:59 UTC ({} txs), candidate {} -> slice {} of {}",
        window.duration_hours,
        window.start_hour,
        window.end_hour(),
        window.sum,
        report.selection.candidate,
        report.selection.slice,
        report.wedge.slices,
    );
    let _ = writeln!(
        out,
        "Globe wedge: {:.1} to {:.1} longitude (centre {:.1})",
        report.wedge.start_lon, report.wedge.end_lon, report.wedge.center_lon
    );
    let _ = writeln!(out);
    out
}
