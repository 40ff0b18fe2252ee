use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use sunspot_core::{HourHistogram, Selection, Window, WindowSet};

use crate::config::SunspotConfig;
use crate::error::SunspotError;
use crate::util::{bold, use_color};

#[derive(Debug, Serialize)]
struct SelectOutput<'a> {
    windows: &'a [Window],
    selection: Selection,
}

/// Runs the selector on a literal histogram; handy for checking what a wallet's counts map to.
pub fn select(
    counts: &[u64],
    config: Option<&Path>,
    json: bool,
    no_color: bool,
) -> Result<(), SunspotError> {
    let window = SunspotConfig::load(config)?.window_config()?;
    let histogram = HourHistogram::try_from(counts)?;
    let set = WindowSet::scan(&histogram, &window);

    let mut out = io::stdout().lock();
    if json {
        let output = SelectOutput {
            windows: set.windows(),
            selection: set.selection(),
        };
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
    } else {
        out.write_all(render_candidates(&set, use_color(None, no_color)).as_bytes())?;
    }
    Ok(())
}

fn render_candidates(set: &WindowSet, colored: bool) -> String {
    let selection = set.selection();
    let mut text = String::new();
    for window in set.windows() {
        let marker = if window.index == selection.candidate {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            text,
            "{marker} #{} {:02}:00-{:02}:59  {:>6}",
            window.index,
            window.start_hour,
            window.end_hour(),
            window.sum
        );
    }
    let slice = selection.slice.to_string();
    let slice = if colored {
        bold(&slice).to_string()
    } else {
        slice
    };
    let _ = writeln!(text, "candidate {} -> slice {slice}", selection.candidate);
    text
}
