use std::io::{self, Write};
use std::path::Path;
use sunspot_report::chart::Wedge;

use crate::config::SunspotConfig;
use crate::error::SunspotError;

pub fn wedge(slice: usize, config: Option<&Path>) -> Result<(), SunspotError> {
    let window = SunspotConfig::load(config)?.window_config()?;
    let wedge = Wedge::new(slice, &window)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &wedge.geojson())?;
    writeln!(out)?;
    Ok(())
}
