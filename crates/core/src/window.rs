//! Circular window selection over an [`HourHistogram`].
//!
//! The day is divided into `slices` evenly spaced candidate starts. Each candidate covers
//! `duration_hours` consecutive buckets, wrapping past 23:00 back to 00:00, so candidates
//! overlap whenever the duration is longer than a slice. The candidate with the largest sum
//! wins (earliest candidate on ties) and its ordinal is rotated by `remap_offset` into the
//! numbering used by the globe partition.

use crate::error::ConfigErrorKind;
use crate::{HourHistogram, Result, HOURS_PER_DAY};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_SLICES: usize = 8;

/// Longer than half a day so a single window can hold a burst that straddles midnight.
pub const DEFAULT_WINDOW_HOURS: usize = 16;

/// Globe partitions are numbered from longitude -180, three slices ahead of the scan origin.
pub const DEFAULT_REMAP_OFFSET: usize = 3;

/// Validated parameters for [`select_best_window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowConfig {
    slices: usize,
    duration_hours: usize,
    remap_offset: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            slices: DEFAULT_SLICES,
            duration_hours: DEFAULT_WINDOW_HOURS,
            remap_offset: DEFAULT_REMAP_OFFSET,
        }
    }
}

impl WindowConfig {
    pub fn new(slices: usize, duration_hours: usize, remap_offset: usize) -> Result<Self> {
        if slices == 0 {
            return Err(ConfigErrorKind::SlicesZero.into());
        }
        if HOURS_PER_DAY % slices != 0 {
            return Err(ConfigErrorKind::SlicesUneven(slices).into());
        }
        if duration_hours == 0 {
            return Err(ConfigErrorKind::DurationZero.into());
        }
        if duration_hours > HOURS_PER_DAY {
            return Err(ConfigErrorKind::DurationTooLong(duration_hours).into());
        }
        Ok(Self {
            slices,
            duration_hours,
            remap_offset,
        })
    }

    pub fn slices(&self) -> usize {
        self.slices
    }

    pub fn duration_hours(&self) -> usize {
        self.duration_hours
    }

    pub fn remap_offset(&self) -> usize {
        self.remap_offset
    }

    /// Hours between consecutive candidate starts.
    pub fn slice_hours(&self) -> usize {
        HOURS_PER_DAY / self.slices
    }

    pub fn start_hour(&self, candidate: usize) -> usize {
        (candidate * self.slice_hours()) % HOURS_PER_DAY
    }

    /// Maps a candidate ordinal (scan order) to the external slice index.
    pub fn remap(&self, candidate: usize) -> usize {
        (candidate + self.remap_offset) % self.slices
    }
}

/// A candidate span of buckets and the activity it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Ordinal in scan order, before remapping.
    pub index: usize,
    pub start_hour: usize,
    pub duration_hours: usize,
    pub sum: u64,
}

impl Window {
    /// Covered hours in order, wrapping at midnight.
    pub fn hours(&self) -> impl Iterator<Item = usize> {
        let start = self.start_hour;
        (0..self.duration_hours).map(move |k| (start + k) % HOURS_PER_DAY)
    }

    /// Last covered hour (inclusive).
    pub fn end_hour(&self) -> usize {
        (self.start_hour + self.duration_hours + HOURS_PER_DAY - 1) % HOURS_PER_DAY
    }

    pub fn covers(&self, hour: usize) -> bool {
        let offset = (hour % HOURS_PER_DAY + HOURS_PER_DAY - self.start_hour) % HOURS_PER_DAY;
        offset < self.duration_hours
    }
}

/// Every candidate window for one histogram, in ascending start order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSet {
    config: WindowConfig,
    windows: Vec<Window>,
    best: usize,
}

impl WindowSet {
    pub fn scan(histogram: &HourHistogram, config: &WindowConfig) -> Self {
        let windows: Vec<Window> = (0..config.slices())
            .map(|index| {
                let start_hour = config.start_hour(index);
                let sum = (0..config.duration_hours())
                    .map(|k| histogram.count(start_hour + k))
                    .sum();
                Window {
                    index,
                    start_hour,
                    duration_hours: config.duration_hours(),
                    sum,
                }
            })
            .collect();

        // strict comparison keeps the first maximum
        let mut best = 0;
        for window in windows.iter().skip(1) {
            if window.sum > windows[best].sum {
                best = window.index;
            }
        }

        Self {
            config: *config,
            windows,
            best,
        }
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn best(&self) -> &Window {
        &self.windows[self.best]
    }

    pub fn selection(&self) -> Selection {
        let window = *self.best();
        let slice = self.config.remap(window.index);
        debug!(
            "best window #{} starts {:02}:00 (sum {}), slice {}",
            window.index, window.start_hour, window.sum, slice
        );
        Selection {
            candidate: window.index,
            slice,
            window,
        }
    }
}

/// The winning window, plus its remapped slice index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub candidate: usize,
    /// Index in the globe partition numbering; always `< slices`.
    pub slice: usize,
    pub window: Window,
}

pub fn select_best_window(histogram: &HourHistogram, config: &WindowConfig) -> Selection {
    WindowSet::scan(histogram, config).selection()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bucketize, Error};

    fn spike(hour: usize, count: u64) -> HourHistogram {
        let mut counts = [0; HOURS_PER_DAY];
        counts[hour] = count;
        HourHistogram::from_counts(counts)
    }

    #[test]
    fn default_candidates_start_every_three_hours() {
        let set = WindowSet::scan(&HourHistogram::new(), &WindowConfig::default());
        let starts: Vec<usize> = set.windows().iter().map(|w| w.start_hour).collect();
        assert_eq!(starts, vec![0, 3, 6, 9, 12, 15, 18, 21]);
        assert!(set.windows().iter().all(|w| w.duration_hours == 16));
    }

    #[test]
    fn all_zero_selects_three() {
        let selection = select_best_window(&HourHistogram::new(), &WindowConfig::default());
        assert_eq!(selection.candidate, 0);
        assert_eq!(selection.slice, 3);
    }

    #[test]
    fn uniform_day_ties_to_first_candidate() {
        let hist = bucketize((0..24).map(|h: i64| h * 3600 + 59));
        let set = WindowSet::scan(&hist, &WindowConfig::default());
        assert!(set.windows().iter().all(|w| w.sum == 16));
        assert_eq!(set.selection().slice, 3);
    }

    #[test]
    fn spike_at_ten_is_won_by_first_candidate() {
        let set = WindowSet::scan(&spike(10, 100), &WindowConfig::default());
        let covering: Vec<usize> = set
            .windows()
            .iter()
            .filter(|w| w.sum == 100)
            .map(|w| w.start_hour)
            .collect();
        assert_eq!(covering, vec![0, 3, 6, 9, 21]);
        let selection = set.selection();
        assert_eq!(selection.candidate, 0);
        assert_eq!(selection.slice, 3);
    }

    #[test]
    fn spike_at_twenty_is_won_by_six_oclock_window() {
        let selection = select_best_window(&spike(20, 5), &WindowConfig::default());
        assert_eq!(selection.window.start_hour, 6);
        assert_eq!(selection.candidate, 2);
        assert_eq!(selection.slice, 5);
    }

    #[test]
    fn spike_selects_lowest_covering_candidate() {
        let config = WindowConfig::default();
        for hour in 0..HOURS_PER_DAY {
            let set = WindowSet::scan(&spike(hour, 7), &config);
            let expected = set
                .windows()
                .iter()
                .find(|w| w.covers(hour))
                .map(|w| w.index)
                .unwrap();
            let selection = set.selection();
            assert_eq!(selection.candidate, expected, "spike at {hour}");
            assert!(selection.window.covers(hour));
        }
    }

    #[test]
    fn spike_candidates_by_hour() {
        // start 0 covers 00-15, start 3 adds 16-18, start 6 adds 19-21, start 9 adds 22-23
        #[rustfmt::skip]
        let expected: [usize; HOURS_PER_DAY] = [
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            1, 1, 1,
            2, 2, 2,
            3, 3,
        ];
        let config = WindowConfig::default();
        for (hour, candidate) in expected.into_iter().enumerate() {
            let selection = select_best_window(&spike(hour, 1), &config);
            assert_eq!(selection.candidate, candidate, "spike at {hour}");
            assert_eq!(selection.slice, (candidate + 3) % 8, "spike at {hour}");
        }
    }

    #[test]
    fn later_strict_maximum_wins() {
        // evening-heavy: hours 18..23 and 0..2 dominate
        let mut counts = [1; HOURS_PER_DAY];
        for hour in [18, 19, 20, 21, 22, 23, 0, 1, 2] {
            counts[hour] = 50;
        }
        let set = WindowSet::scan(&HourHistogram::from_counts(counts), &WindowConfig::default());
        let best = set.best();
        assert!(set.windows().iter().all(|w| w.sum <= best.sum));
        assert!(set.windows()[..best.index].iter().all(|w| w.sum < best.sum));
    }

    #[test]
    fn window_wraps_past_midnight() {
        let set = WindowSet::scan(&HourHistogram::new(), &WindowConfig::default());
        let last = set.windows()[7];
        assert_eq!(last.start_hour, 21);
        assert_eq!(last.end_hour(), 12);
        let hours: Vec<usize> = last.hours().collect();
        assert_eq!(hours.len(), 16);
        assert_eq!(hours[..4], [21, 22, 23, 0]);
        assert!(last.covers(0) && last.covers(12) && !last.covers(13) && !last.covers(20));
    }

    #[test]
    fn selection_is_deterministic_and_in_range() {
        let config = WindowConfig::default();
        let mut counts = [0; HOURS_PER_DAY];
        for (hour, count) in counts.iter_mut().enumerate() {
            *count = ((hour * 37 + 11) % 13) as u64;
        }
        let hist = HourHistogram::from_counts(counts);
        let first = select_best_window(&hist, &config);
        for _ in 0..10 {
            assert_eq!(select_best_window(&hist, &config), first);
        }
        assert!(first.slice < config.slices());
    }

    #[test]
    fn remap_wraps_modulo_slices() {
        let config = WindowConfig::default();
        let remapped: Vec<usize> = (0..8).map(|i| config.remap(i)).collect();
        assert_eq!(remapped, vec![3, 4, 5, 6, 7, 0, 1, 2]);
    }

    #[test]
    fn rejects_invalid_config() {
        let cases = [
            (0, 16, ConfigErrorKind::SlicesZero),
            (5, 16, ConfigErrorKind::SlicesUneven(5)),
            (8, 0, ConfigErrorKind::DurationZero),
            (8, 25, ConfigErrorKind::DurationTooLong(25)),
        ];
        for (slices, duration, kind) in cases {
            match WindowConfig::new(slices, duration, 3) {
                Err(Error::Config(actual)) => assert_eq!(actual, kind),
                other => panic!("expected {kind:?}, got {other:?}"),
            }
        }
        assert!(WindowConfig::new(24, 1, 0).is_ok());
        assert!(WindowConfig::new(1, 24, 0).is_ok());
    }

    #[test]
    fn custom_config_spacing() {
        let config = WindowConfig::new(4, 6, 1).unwrap();
        assert_eq!(config.slice_hours(), 6);
        let selection = select_best_window(&spike(13, 2), &config);
        assert_eq!(selection.window.start_hour, 12);
        assert_eq!(selection.candidate, 2);
        assert_eq!(selection.slice, 3);
    }
}
