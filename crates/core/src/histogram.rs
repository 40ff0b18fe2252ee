//! Hour-of-day histogram over confirmation timestamps.
//!
//! A [`HourHistogram`] always holds exactly [`HOURS_PER_DAY`] buckets, indexed by UTC hour.
//! [`bucketize`] is the only way timestamps enter it; records without a timestamp are skipped.

use crate::{Error, Result, Timestamped};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const HOURS_PER_DAY: usize = 24;
const SECONDS_PER_HOUR: i64 = 3600;

/// UTC hour-of-day for an epoch timestamp in seconds.
pub fn hour_of_day(timestamp: i64) -> usize {
    // euclidean so pre-epoch timestamps still land in 0..24
    timestamp
        .div_euclid(SECONDS_PER_HOUR)
        .rem_euclid(HOURS_PER_DAY as i64) as usize
}

/// Formats an hour index as the `"HH:00"` chart label.
pub fn format_hour_label(hour: usize) -> String {
    format!("{hour:02}:00")
}

/// Parses a `"HH:00"` label back into its hour index.
pub fn parse_hour_label(label: &str) -> Result<usize> {
    let invalid = || Error::HourLabelInvalid(label.to_owned());
    let hours = label.strip_suffix(":00").ok_or_else(invalid)?;
    if hours.len() != 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hour: usize = hours.parse().map_err(|_| invalid())?;
    if hour >= HOURS_PER_DAY {
        return Err(invalid());
    }
    Ok(hour)
}

/// One labelled bar of the hourly chart.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HourCount {
    pub label: String,
    pub count: u64,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HourHistogram {
    counts: [u64; HOURS_PER_DAY],
}

impl HourHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: [u64; HOURS_PER_DAY]) -> Self {
        Self { counts }
    }

    /// Rebuilds a histogram from chart rows. Every hour must appear exactly once.
    pub fn from_rows(rows: &[HourCount]) -> Result<Self> {
        if rows.len() != HOURS_PER_DAY {
            return Err(Error::HistogramLength {
                expected: HOURS_PER_DAY,
                actual: rows.len(),
            });
        }
        let mut counts = [0; HOURS_PER_DAY];
        let mut seen = [false; HOURS_PER_DAY];
        for row in rows {
            let hour = parse_hour_label(&row.label)?;
            if seen[hour] {
                return Err(Error::HourLabelInvalid(row.label.clone()));
            }
            seen[hour] = true;
            counts[hour] = row.count;
        }
        Ok(Self { counts })
    }

    /// Increments the bucket for `timestamp`'s UTC hour.
    pub fn record(&mut self, timestamp: i64) {
        self.counts[hour_of_day(timestamp)] += 1;
    }

    pub fn count(&self, hour: usize) -> u64 {
        self.counts[hour % HOURS_PER_DAY]
    }

    pub fn counts(&self) -> &[u64; HOURS_PER_DAY] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Most active hour; the earliest one wins ties. `None` when nothing was recorded.
    pub fn peak_hour(&self) -> Option<usize> {
        let max = self.max_count();
        if max == 0 {
            return None;
        }
        self.counts.iter().position(|&c| c == max)
    }

    /// `(hour, count)` pairs in ascending hour order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }

    /// Chart rows, `"00:00"` through `"23:00"`.
    pub fn to_rows(&self) -> Vec<HourCount> {
        self.iter()
            .map(|(hour, count)| HourCount {
                label: format_hour_label(hour),
                count,
            })
            .collect()
    }
}

impl TryFrom<&[u64]> for HourHistogram {
    type Error = Error;

    fn try_from(counts: &[u64]) -> Result<Self> {
        let counts: [u64; HOURS_PER_DAY] =
            counts.try_into().map_err(|_| Error::HistogramLength {
                expected: HOURS_PER_DAY,
                actual: counts.len(),
            })?;
        Ok(Self { counts })
    }
}

/// Counts records per UTC hour-of-day. Records without a timestamp are skipped.
pub fn bucketize<I>(records: I) -> HourHistogram
where
    I: IntoIterator,
    I::Item: Timestamped,
{
    let mut histogram = HourHistogram::new();
    let mut skipped = 0usize;
    for record in records {
        match record.timestamp() {
            Some(ts) => histogram.record(ts),
            None => skipped += 1,
        }
    }
    debug!(
        "bucketized {} records ({} without timestamp)",
        histogram.total(),
        skipped
    );
    histogram
}
