//! Metric model and status classification.
//!
//! Every monitored quantity is a [`MetricKind`] variant carrying its own
//! static tables: display range (what the gauge draws), operating range
//! (what the simulation clamps into), unit, seed value, and the threshold
//! ladder that [`MetricKind::classify`] evaluates. The two range notions are
//! deliberately distinct: a power gauge is drawn on a 0–100 % scale even
//! though the machine never operates below 70 %.

use serde::{Deserialize, Serialize};

/// One monitored physical quantity of a blower machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Outlet air temperature.
    Temperature,
    /// Discharge pressure.
    Pressure,
    /// Drive power draw relative to rated load.
    Power,
    /// Impeller housing vibration.
    Vibration,
    /// Lubrication oil level.
    OilLevel,
    /// Overall compression efficiency.
    Efficiency,
}

/// All metric kinds, in gauge-panel order.
pub const ALL_METRICS: [MetricKind; 6] = [
    MetricKind::Temperature,
    MetricKind::Pressure,
    MetricKind::Power,
    MetricKind::Vibration,
    MetricKind::OilLevel,
    MetricKind::Efficiency,
];

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl MetricKind {
    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Pressure",
            Self::Power => "Power",
            Self::Vibration => "Vibration",
            Self::OilLevel => "Oil Level",
            Self::Efficiency => "Efficiency",
        }
    }

    /// Display unit.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Pressure => "bar",
            Self::Power => "%",
            Self::Vibration => "g",
            Self::OilLevel => "%",
            Self::Efficiency => "%",
        }
    }

    /// Gauge scale `(min, max)`: what the display widget draws against.
    pub fn display_range(self) -> (f64, f64) {
        match self {
            Self::Temperature => (60.0, 90.0),
            Self::Pressure => (1.5, 3.5),
            Self::Power => (0.0, 100.0),
            Self::Vibration => (0.0, 1.5),
            Self::OilLevel => (0.0, 100.0),
            Self::Efficiency => (0.0, 100.0),
        }
    }

    /// Operating envelope `(min, max)`: the simulation clamps into this.
    ///
    /// Narrower than [`display_range`](Self::display_range) for Power,
    /// Vibration, Oil Level and Efficiency: the machine idles high even when
    /// the gauge scale starts at zero.
    pub fn operating_range(self) -> (f64, f64) {
        match self {
            Self::Temperature => (60.0, 90.0),
            Self::Pressure => (1.5, 3.5),
            Self::Power => (70.0, 100.0),
            Self::Vibration => (0.1, 1.5),
            Self::OilLevel => (30.0, 100.0),
            Self::Efficiency => (80.0, 100.0),
        }
    }

    /// Reading a freshly mounted view starts from.
    pub fn seed_value(self) -> f64 {
        match self {
            Self::Temperature => 72.0,
            Self::Pressure => 2.4,
            Self::Power => 85.0,
            Self::Vibration => 0.8,
            Self::OilLevel => 65.0,
            Self::Efficiency => 92.0,
        }
    }

    /// Which gauge widget renders this metric.
    pub fn gauge_kind(self) -> GaugeKind {
        // The dashboard currently draws every metric as a bar; the circular
        // variant exists for the gauge widget's sake.
        GaugeKind::Linear
    }

    /// Derive the qualitative status for a reading of this metric.
    ///
    /// Bands are evaluated high-to-low with strict comparisons, so a value
    /// sitting exactly on a boundary falls to the lower-severity branch:
    /// a temperature of 85.0 is `Warning`, not `Critical`.
    pub fn classify(self, value: f64) -> MetricStatus {
        match self {
            Self::Temperature => {
                if value > 85.0 {
                    MetricStatus::Critical
                } else if value > 75.0 {
                    MetricStatus::Warning
                } else {
                    MetricStatus::Normal
                }
            }
            Self::Pressure => {
                if value > 3.0 {
                    MetricStatus::Critical
                } else if value > 2.5 {
                    MetricStatus::Warning
                } else {
                    MetricStatus::Normal
                }
            }
            Self::Power => {
                if value > 95.0 {
                    MetricStatus::Warning
                } else if value > 80.0 {
                    MetricStatus::Optimal
                } else {
                    MetricStatus::Normal
                }
            }
            Self::Vibration => {
                if value > 1.2 {
                    MetricStatus::Critical
                } else if value > 0.9 {
                    MetricStatus::Warning
                } else {
                    MetricStatus::Normal
                }
            }
            Self::OilLevel => {
                if value < 40.0 {
                    MetricStatus::Critical
                } else if value < 60.0 {
                    MetricStatus::Warning
                } else {
                    MetricStatus::Normal
                }
            }
            Self::Efficiency => {
                if value > 90.0 {
                    MetricStatus::Optimal
                } else if value > 80.0 {
                    MetricStatus::Normal
                } else {
                    MetricStatus::Warning
                }
            }
        }
    }
}

/// Gauge widget shape for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeKind {
    Circular,
    Linear,
}

/// Qualitative state derived from a metric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Normal,
    Warning,
    Critical,
    Optimal,
}

impl std::fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

/// Current reading of one metric, status always recomputed from the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: f64,
    pub status: MetricStatus,
}

impl Metric {
    /// A metric at its seed value, status derived.
    pub fn seeded(kind: MetricKind) -> Self {
        let value = kind.seed_value();
        Self {
            kind,
            value,
            status: kind.classify(value),
        }
    }

    /// A metric at an explicit value, status derived.
    pub fn at(kind: MetricKind, value: f64) -> Self {
        Self {
            kind,
            value,
            status: kind.classify(value),
        }
    }

    /// Gauge fill in `[0, 1]` against the display range.
    pub fn gauge_ratio(&self) -> f64 {
        let (min, max) = self.kind.display_range();
        ((self.value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

/// The full metric panel for a freshly mounted machine view.
pub fn seed_metrics() -> Vec<Metric> {
    ALL_METRICS.iter().map(|&k| Metric::seeded(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Classifier table tests
    // -----------------------------------------------------------------------

    #[test]
    fn temperature_bands() {
        assert_eq!(MetricKind::Temperature.classify(86.0), MetricStatus::Critical);
        assert_eq!(MetricKind::Temperature.classify(80.0), MetricStatus::Warning);
        assert_eq!(MetricKind::Temperature.classify(70.0), MetricStatus::Normal);
    }

    #[test]
    fn temperature_boundaries_fall_to_lower_severity() {
        // Strict comparisons: exactly-on-threshold readings take the milder band.
        assert_eq!(MetricKind::Temperature.classify(85.0), MetricStatus::Warning);
        assert_eq!(MetricKind::Temperature.classify(75.0), MetricStatus::Normal);
    }

    #[test]
    fn pressure_bands() {
        assert_eq!(MetricKind::Pressure.classify(3.2), MetricStatus::Critical);
        assert_eq!(MetricKind::Pressure.classify(2.7), MetricStatus::Warning);
        assert_eq!(MetricKind::Pressure.classify(2.4), MetricStatus::Normal);
        assert_eq!(MetricKind::Pressure.classify(3.0), MetricStatus::Warning);
    }

    #[test]
    fn power_has_optimal_band() {
        assert_eq!(MetricKind::Power.classify(97.0), MetricStatus::Warning);
        assert_eq!(MetricKind::Power.classify(90.0), MetricStatus::Optimal);
        assert_eq!(MetricKind::Power.classify(75.0), MetricStatus::Normal);
        assert_eq!(MetricKind::Power.classify(95.0), MetricStatus::Optimal);
    }

    #[test]
    fn vibration_bands() {
        assert_eq!(MetricKind::Vibration.classify(1.3), MetricStatus::Critical);
        assert_eq!(MetricKind::Vibration.classify(1.0), MetricStatus::Warning);
        assert_eq!(MetricKind::Vibration.classify(0.5), MetricStatus::Normal);
    }

    #[test]
    fn oil_level_inverts_comparison() {
        // Low oil is the dangerous direction.
        assert_eq!(MetricKind::OilLevel.classify(35.0), MetricStatus::Critical);
        assert_eq!(MetricKind::OilLevel.classify(50.0), MetricStatus::Warning);
        assert_eq!(MetricKind::OilLevel.classify(80.0), MetricStatus::Normal);
        assert_eq!(MetricKind::OilLevel.classify(40.0), MetricStatus::Warning);
        assert_eq!(MetricKind::OilLevel.classify(60.0), MetricStatus::Normal);
    }

    #[test]
    fn efficiency_low_is_warning() {
        assert_eq!(MetricKind::Efficiency.classify(95.0), MetricStatus::Optimal);
        assert_eq!(MetricKind::Efficiency.classify(85.0), MetricStatus::Normal);
        assert_eq!(MetricKind::Efficiency.classify(78.0), MetricStatus::Warning);
        assert_eq!(MetricKind::Efficiency.classify(90.0), MetricStatus::Normal);
        assert_eq!(MetricKind::Efficiency.classify(80.0), MetricStatus::Warning);
    }

    #[test]
    fn classify_is_deterministic() {
        for &kind in &ALL_METRICS {
            let (lo, hi) = kind.operating_range();
            let mid = (lo + hi) / 2.0;
            assert_eq!(kind.classify(mid), kind.classify(mid));
        }
    }

    // -----------------------------------------------------------------------
    // Range table tests
    // -----------------------------------------------------------------------

    #[test]
    fn operating_range_within_display_range() {
        for &kind in &ALL_METRICS {
            let (dlo, dhi) = kind.display_range();
            let (olo, ohi) = kind.operating_range();
            assert!(olo >= dlo, "{kind}: operating min below display min");
            assert!(ohi <= dhi, "{kind}: operating max above display max");
        }
    }

    #[test]
    fn seed_values_inside_operating_range() {
        for &kind in &ALL_METRICS {
            let (lo, hi) = kind.operating_range();
            let seed = kind.seed_value();
            assert!(seed >= lo && seed <= hi, "{kind}: seed {seed} outside [{lo}, {hi}]");
        }
    }

    #[test]
    fn power_ranges_are_distinct_notions() {
        assert_eq!(MetricKind::Power.display_range(), (0.0, 100.0));
        assert_eq!(MetricKind::Power.operating_range(), (70.0, 100.0));
    }

    // -----------------------------------------------------------------------
    // Metric struct tests
    // -----------------------------------------------------------------------

    #[test]
    fn seeded_metric_status_matches_classifier() {
        for &kind in &ALL_METRICS {
            let m = Metric::seeded(kind);
            assert_eq!(m.status, kind.classify(m.value));
        }
    }

    #[test]
    fn seed_metrics_covers_every_kind_once() {
        let metrics = seed_metrics();
        assert_eq!(metrics.len(), ALL_METRICS.len());
        for (m, &kind) in metrics.iter().zip(ALL_METRICS.iter()) {
            assert_eq!(m.kind, kind);
        }
    }

    #[test]
    fn gauge_ratio_spans_display_range() {
        let low = Metric::at(MetricKind::Temperature, 60.0);
        let high = Metric::at(MetricKind::Temperature, 90.0);
        assert_eq!(low.gauge_ratio(), 0.0);
        assert_eq!(high.gauge_ratio(), 1.0);

        let mid = Metric::at(MetricKind::Power, 50.0);
        assert!((mid.gauge_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn gauge_ratio_clamps_out_of_scale_values() {
        let m = Metric::at(MetricKind::Temperature, 10.0);
        assert_eq!(m.gauge_ratio(), 0.0);
    }

    #[test]
    fn metric_labels_and_units() {
        assert_eq!(MetricKind::OilLevel.label(), "Oil Level");
        assert_eq!(MetricKind::Temperature.unit(), "°C");
        assert_eq!(MetricKind::Pressure.unit(), "bar");
        assert_eq!(MetricKind::Vibration.unit(), "g");
    }

    #[test]
    fn all_gauges_currently_linear() {
        for &kind in &ALL_METRICS {
            assert_eq!(kind.gauge_kind(), GaugeKind::Linear);
        }
    }
}
