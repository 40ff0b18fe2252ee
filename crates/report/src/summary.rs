use crate::chart::{HourlyChart, HourlyChartData, Wedge};
use crate::Result;
use chrono::{DateTime, SecondsFormat};
use serde::Serialize;
use sunspot_core::{
    bucketize, ConfirmedSignature, HourHistogram, Selection, Timestamped, Window, WindowConfig,
    WindowSet,
};
use tracing::{debug, warn};

/// Everything the display and globe collaborators need for one wallet.
#[derive(Clone, Debug, Serialize)]
pub struct ActivityReport {
    pub address: String,
    pub source: String,
    /// Signatures returned by the source.
    pub fetched: usize,
    /// Signatures with a confirmation time; these make up the histogram.
    pub analyzed: u64,
    /// Signatures without a confirmation time.
    pub skipped: usize,
    /// Failed transactions; still counted as activity.
    pub failed: usize,
    pub earliest: Option<String>,
    pub latest: Option<String>,
    pub hourly: HourlyChartData,
    pub windows: Vec<Window>,
    pub selection: Selection,
    pub wedge: Wedge,
    #[serde(skip)]
    histogram: HourHistogram,
}

impl ActivityReport {
    pub fn build(
        address: &str,
        source: &str,
        signatures: &[ConfirmedSignature],
        config: &WindowConfig,
    ) -> Result<Self> {
        let histogram = bucketize(signatures);
        let skipped = signatures.len() - histogram.total() as usize;
        if skipped > 0 {
            warn!("{skipped} signatures for {address} have no block time and were skipped");
        }

        let window_set = WindowSet::scan(&histogram, config);
        let selection = window_set.selection();
        let wedge = Wedge::new(selection.slice, config)?;

        let times = signatures.iter().filter_map(|s| s.timestamp());
        let earliest = times.clone().min().and_then(format_timestamp);
        let latest = times.max().and_then(format_timestamp);

        debug!(
            "{address}: {} of {} signatures analysed, slice {}",
            histogram.total(),
            signatures.len(),
            selection.slice
        );

        Ok(Self {
            address: address.to_owned(),
            source: source.to_owned(),
            fetched: signatures.len(),
            analyzed: histogram.total(),
            skipped,
            failed: signatures.iter().filter(|s| s.is_failed()).count(),
            earliest,
            latest,
            hourly: HourlyChart::new(&histogram).chart_data(),
            windows: window_set.windows().to_vec(),
            selection,
            wedge,
            histogram,
        })
    }

    pub fn histogram(&self) -> &HourHistogram {
        &self.histogram
    }

    pub fn headline(&self) -> String {
        format!("Analyzed your last {} transactions.", self.analyzed)
    }
}

/// RFC 3339 in UTC, e.g. `2024-05-27T16:00:00Z`.
fn format_timestamp(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}
