//! Historical-series generation for the dashboard chart.
//!
//! There is no stored history. Each request synthesizes a plausible series
//! around the metric's seed value, scattered by a per-metric variance. The
//! point count scales with the selected window, clamped to [24, 100].

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::metric::MetricKind;
use crate::sim::round_tenth;

/// Selectable chart windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Minutes,
    Hour,
    ThreeHours,
    TwelveHours,
    Day,
    ThreeDays,
    Week,
}

/// All chart windows, in menu order.
pub const ALL_RANGES: [TimeRange; 7] = [
    TimeRange::Minutes,
    TimeRange::Hour,
    TimeRange::ThreeHours,
    TimeRange::TwelveHours,
    TimeRange::Day,
    TimeRange::ThreeDays,
    TimeRange::Week,
];

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            Self::Minutes => "Minutes",
            Self::Hour => "Hour",
            Self::ThreeHours => "3 Hours",
            Self::TwelveHours => "12 Hours",
            Self::Day => "Day",
            Self::ThreeDays => "3 Days",
            Self::Week => "Week",
        }
    }

    /// Window width in hours.
    pub fn hours(self) -> f64 {
        match self {
            Self::Minutes => 1.0 / 60.0,
            Self::Hour => 1.0,
            Self::ThreeHours => 3.0,
            Self::TwelveHours => 12.0,
            Self::Day => 24.0,
            Self::ThreeDays => 72.0,
            Self::Week => 168.0,
        }
    }

    /// Number of points synthesized for this window.
    pub fn points(self) -> usize {
        (self.hours() as usize).clamp(24, 100)
    }

    /// The next window in menu order, wrapping.
    pub fn next(self) -> Self {
        let idx = ALL_RANGES.iter().position(|&r| r == self).unwrap_or(0);
        ALL_RANGES[(idx + 1) % ALL_RANGES.len()]
    }

    /// Timestamp label for a chart point in this window.
    pub fn format_point(self, at: DateTime<chrono::Local>) -> String {
        let hours = self.hours();
        if hours <= 1.0 {
            at.format("%M:%S").to_string()
        } else if hours <= 24.0 {
            at.format("%H:%M").to_string()
        } else if hours <= 72.0 {
            at.format("%m/%d %H:%M").to_string()
        } else {
            at.format("%m/%d").to_string()
        }
    }
}

/// Scatter width the series wanders inside, per metric.
pub fn history_variance(kind: MetricKind) -> f64 {
    match kind {
        MetricKind::Temperature => 5.0,
        MetricKind::Pressure => 0.3,
        MetricKind::Power => 5.0,
        MetricKind::Vibration => 0.2,
        MetricKind::OilLevel => 5.0,
        MetricKind::Efficiency => 3.0,
    }
}

/// One synthesized sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPoint {
    pub at: DateTime<Utc>,
    pub value: f64,
}

/// Synthesize a series for `kind` over `range`, oldest point first, ending
/// at `now`.
pub fn generate_history<R: Rng>(
    kind: MetricKind,
    range: TimeRange,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    let points = range.points();
    let base = kind.seed_value();
    let variance = history_variance(kind);
    let window_secs = range.hours() * 3600.0;

    (0..points)
        .rev()
        .map(|i| {
            let back = window_secs * i as f64 / points as f64;
            let at = now - Duration::milliseconds((back * 1000.0) as i64);
            let value = round_tenth(base + (rng.random::<f64>() - 0.5) * variance);
            HistoryPoint { at, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn point_counts_clamp_to_bounds() {
        assert_eq!(TimeRange::Minutes.points(), 24);
        assert_eq!(TimeRange::Hour.points(), 24);
        assert_eq!(TimeRange::TwelveHours.points(), 24);
        assert_eq!(TimeRange::ThreeDays.points(), 72);
        assert_eq!(TimeRange::Week.points(), 100);
    }

    #[test]
    fn range_cycle_wraps() {
        let mut r = TimeRange::Minutes;
        for _ in 0..ALL_RANGES.len() {
            r = r.next();
        }
        assert_eq!(r, TimeRange::Minutes);
    }

    #[test]
    fn series_is_chronological_and_ends_now() {
        let mut rng = StdRng::seed_from_u64(61);
        let now = Utc::now();
        let series = generate_history(MetricKind::Temperature, TimeRange::Day, now, &mut rng);
        assert_eq!(series.len(), TimeRange::Day.points());
        for pair in series.windows(2) {
            assert!(pair[0].at <= pair[1].at);
        }
        assert_eq!(series.last().unwrap().at, now);
    }

    #[test]
    fn series_stays_near_base_value() {
        let mut rng = StdRng::seed_from_u64(67);
        let now = Utc::now();
        for &kind in &crate::metric::ALL_METRICS {
            let base = kind.seed_value();
            let half = history_variance(kind) / 2.0;
            let series = generate_history(kind, TimeRange::Week, now, &mut rng);
            for p in &series {
                // Rounding can push a hair past the raw scatter bound.
                assert!(
                    (p.value - base).abs() <= half + 0.05,
                    "{kind}: {} strayed from {base}",
                    p.value
                );
            }
        }
    }

    #[test]
    fn series_values_rounded_to_tenth() {
        let mut rng = StdRng::seed_from_u64(71);
        let series = generate_history(
            MetricKind::Pressure,
            TimeRange::Hour,
            Utc::now(),
            &mut rng,
        );
        for p in &series {
            assert_eq!(p.value, round_tenth(p.value));
        }
    }

    #[test]
    fn variance_table_covers_all_kinds() {
        for &kind in &crate::metric::ALL_METRICS {
            assert!(history_variance(kind) > 0.0);
        }
    }
}
