use serde::Serialize;
use sunspot_core::{histogram::format_hour_label, HourCount, HourHistogram};

pub struct HourlyChart {
    histogram: HourHistogram,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HourlyChartData {
    /// One row per UTC hour, `"00:00"` first.
    pub rows: Vec<HourCount>,
    pub total: u64,
    pub max_count: u64,
    /// Most active hour as `"HH:00"`; empty when there was no activity.
    pub peak_hours: Vec<String>,
}

impl HourlyChart {
    pub fn new(histogram: &HourHistogram) -> Self {
        Self {
            histogram: *histogram,
        }
    }

    pub fn chart_data(&self) -> HourlyChartData {
        HourlyChartData {
            rows: self.histogram.to_rows(),
            total: self.histogram.total(),
            max_count: self.histogram.max_count(),
            peak_hours: self
                .histogram
                .peak_hour()
                .map(format_hour_label)
                .into_iter()
                .collect(),
        }
    }
}

impl HourlyChartData {
    /// Footer line shown under the chart.
    pub fn peak_caption(&self) -> Option<String> {
        if self.peak_hours.is_empty() {
            return None;
        }
        Some(format!("Most active at {} (UTC)", self.peak_hours.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunspot_core::{bucketize, HOURS_PER_DAY};

    #[test]
    fn chart_data_covers_every_hour() {
        let hist = bucketize([3600_i64 * 2, 3600 * 2 + 5, 3600 * 14, 86_400 + 3600 * 2]);
        let data = HourlyChart::new(&hist).chart_data();
        assert_eq!(data.rows.len(), HOURS_PER_DAY);
        assert_eq!(data.total, 4);
        assert_eq!(data.max_count, 3);
        assert_eq!(data.rows[2].count, 3);
        assert_eq!(data.peak_hours, vec!["02:00".to_owned()]);
        assert_eq!(
            data.peak_caption().as_deref(),
            Some("Most active at 02:00 (UTC)")
        );
    }

    #[test]
    fn no_activity_has_no_peak() {
        let data = HourlyChart::new(&HourHistogram::new()).chart_data();
        assert!(data.peak_hours.is_empty());
        assert_eq!(data.peak_caption(), None);
        assert!(data.rows.iter().all(|r| r.count == 0));
    }
}
