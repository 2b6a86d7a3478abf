//! Alert feed — synthesized notifications with weighted severity.
//!
//! Alerts are drawn from fixed candidate pools. Message, details, and
//! affected part are indexed independently, so a generated alert can pair a
//! pressure message with oil-level details. That is the observed behavior
//! of the system this simulates, kept as-is rather than silently coupled.
//! The feed keeps at most [`MAX_ALERTS`] entries, newest first.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound on the visible alert list. Oldest entries are evicted first.
pub const MAX_ALERTS: usize = 15;

/// Probability that one generator tick raises a new alert.
pub const SPAWN_PROBABILITY: f64 = 0.1;

/// Alert severity, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Draw weights for generated alerts, in [`Severity`] order.
pub const SEVERITY_WEIGHTS: [(Severity, f64); 4] = [
    (Severity::Low, 0.4),
    (Severity::Medium, 0.3),
    (Severity::High, 0.2),
    (Severity::Critical, 0.1),
];

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl Severity {
    /// Weighted draw: low 40%, medium 30%, high 20%, critical 10%.
    pub fn weighted<R: Rng>(rng: &mut R) -> Self {
        Self::from_unit(rng.random::<f64>())
    }

    /// Map a unit-interval sample onto the cumulative weight ladder.
    ///
    /// Falls back to `Low` if no band matched. Guards the r ≈ 1.0 edge
    /// where floating-point accumulation leaves a sliver uncovered.
    fn from_unit(r: f64) -> Self {
        let mut sum = 0.0;
        for &(severity, weight) in &SEVERITY_WEIGHTS {
            sum += weight;
            if r < sum {
                return severity;
            }
        }
        Severity::Low
    }
}

/// Handling state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertStatus {
    New,
    Acknowledged,
    InProgress,
    Resolved,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Acknowledged => write!(f, "acknowledged"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// One transient notification.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: u64,
    pub message: &'static str,
    pub details: &'static str,
    pub affected_part: &'static str,
    pub severity: Severity,
    pub status: AlertStatus,
    pub raised_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Candidate pools
// ---------------------------------------------------------------------------

/// Short alert headlines.
pub const MESSAGES: [&str; 12] = [
    "Temperature fluctuation detected",
    "Vibration level above normal",
    "Power consumption rising significantly",
    "Component wear detected",
    "System efficiency declining",
    "Sensor connection lost",
    "Calibration required",
    "Filter replacement recommended",
    "Noise level increase detected",
    "Pressure approaching critical threshold",
    "Oil level below recommended minimum",
    "Scheduled maintenance in 3 days",
];

/// Long-form problem descriptions. Indexed independently of [`MESSAGES`].
pub const DETAILS: [&str; 12] = [
    "Abnormal temperature fluctuation detected on the main assembly. This can be caused by excessive load or a cooling system fault.",
    "Vibration on the impeller has exceeded the normal band. Possible impeller imbalance or bearing damage; immediate inspection is required.",
    "Power draw has increased significantly. This can come from higher load or a developing inefficiency; an efficiency check is required.",
    "Abnormal wear detected on several components. Intensive use or a lubrication fault can cause this; replacement parts may be needed.",
    "System efficiency has degraded gradually over the last days. Component wear, control faults, and changed operating conditions are all candidates.",
    "Connection to several sensors has dropped. Monitoring data is incomplete until the wiring and sensors are checked.",
    "Several sensors need recalibration to keep measurements accurate. Routine calibration keeps the monitoring system trustworthy.",
    "The air filter has reached the end of its service life and needs replacement to maintain air quality and system efficiency.",
    "An abnormal rise in noise level was detected. The impeller, bearings, or other rotating parts may be the cause; an acoustic check is required.",
    "Air pressure is approaching the maximum allowed limit. If it keeps rising the system will shut down automatically to prevent damage.",
    "Oil in the lubrication circuit has dropped below the recommended level. Running low increases friction and wear on moving parts.",
    "Routine maintenance is scheduled in 3 days. The service team will run a full inspection and replace worn components.",
];

/// Subsystems an alert can point at.
pub const AFFECTED_PARTS: [&str; 10] = [
    "Cooling system",
    "Impeller and bearings",
    "Power system",
    "Mechanical components",
    "Control system",
    "Sensor array",
    "Filter system",
    "Air pressure system",
    "Lubrication system",
    "All systems",
];

// ---------------------------------------------------------------------------
// Feed
// ---------------------------------------------------------------------------

/// Capped, newest-first alert list with a monotonic id counter.
#[derive(Debug, Clone, Default)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertFeed {
    /// An empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The feed a freshly mounted view starts with: a handful of alerts at
    /// staggered ages across the severity and handling-state space.
    pub fn seeded() -> Self {
        let mut feed = Self::new();
        let now = Utc::now();
        let seeds: [(usize, usize, usize, Severity, AlertStatus, i64); 6] = [
            (9, 9, 7, Severity::High, AlertStatus::New, 5),
            (10, 10, 8, Severity::Medium, AlertStatus::Acknowledged, 15),
            (11, 11, 9, Severity::Low, AlertStatus::Acknowledged, 60),
            (0, 0, 0, Severity::Medium, AlertStatus::InProgress, 30),
            (1, 1, 1, Severity::High, AlertStatus::InProgress, 45),
            (2, 2, 2, Severity::Medium, AlertStatus::Acknowledged, 120),
        ];
        for (msg, det, part, severity, status, minutes_ago) in seeds {
            let id = feed.take_id();
            feed.alerts.push(Alert {
                id,
                message: MESSAGES[msg],
                details: DETAILS[det],
                affected_part: AFFECTED_PARTS[part],
                severity,
                status,
                raised_at: now - Duration::minutes(minutes_ago),
            });
        }
        feed
    }

    fn take_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// One generator tick: raises a new alert with [`SPAWN_PROBABILITY`],
    /// returning its id when one was created.
    pub fn maybe_raise<R: Rng>(&mut self, rng: &mut R) -> Option<u64> {
        if rng.random::<f64>() < SPAWN_PROBABILITY {
            Some(self.raise(rng))
        } else {
            None
        }
    }

    /// Synthesize one alert: independent pool draws, weighted severity,
    /// status `new`. Prepends and truncates to [`MAX_ALERTS`].
    pub fn raise<R: Rng>(&mut self, rng: &mut R) -> u64 {
        let id = self.take_id();
        let alert = Alert {
            id,
            message: MESSAGES[rng.random_range(0..MESSAGES.len())],
            details: DETAILS[rng.random_range(0..DETAILS.len())],
            affected_part: AFFECTED_PARTS[rng.random_range(0..AFFECTED_PARTS.len())],
            severity: Severity::weighted(rng),
            status: AlertStatus::New,
            raised_at: Utc::now(),
        };
        log::debug!("raised alert #{id}: {} ({})", alert.message, alert.severity);
        self.alerts.insert(0, alert);
        self.alerts.truncate(MAX_ALERTS);
        id
    }

    /// Remove exactly one alert by id. Returns false when the id is unknown
    /// (already dismissed or evicted).
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() < before
    }

    /// Current alerts, newest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // -----------------------------------------------------------------------
    // Severity draw tests
    // -----------------------------------------------------------------------

    #[test]
    fn severity_bands_from_unit_interval() {
        assert_eq!(Severity::from_unit(0.0), Severity::Low);
        assert_eq!(Severity::from_unit(0.39), Severity::Low);
        assert_eq!(Severity::from_unit(0.4), Severity::Medium);
        assert_eq!(Severity::from_unit(0.69), Severity::Medium);
        assert_eq!(Severity::from_unit(0.7), Severity::High);
        assert_eq!(Severity::from_unit(0.89), Severity::High);
        assert_eq!(Severity::from_unit(0.9), Severity::Critical);
        assert_eq!(Severity::from_unit(0.9999), Severity::Critical);
    }

    #[test]
    fn severity_out_of_band_defaults_low() {
        // r == 1.0 never happens with a real unit draw, but the fallback
        // must hold anyway.
        assert_eq!(Severity::from_unit(1.0), Severity::Low);
        assert_eq!(Severity::from_unit(2.0), Severity::Low);
    }

    #[test]
    fn severity_weights_sum_to_one() {
        let total: f64 = SEVERITY_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    // -----------------------------------------------------------------------
    // Feed tests
    // -----------------------------------------------------------------------

    #[test]
    fn raise_prepends_newest() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut feed = AlertFeed::new();
        let first = feed.raise(&mut rng);
        let second = feed.raise(&mut rng);
        assert_eq!(feed.alerts()[0].id, second);
        assert_eq!(feed.alerts()[1].id, first);
    }

    #[test]
    fn feed_never_exceeds_cap() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut feed = AlertFeed::seeded();
        for _ in 0..100 {
            feed.raise(&mut rng);
            assert!(feed.len() <= MAX_ALERTS);
        }
        assert_eq!(feed.len(), MAX_ALERTS);
    }

    #[test]
    fn eviction_drops_oldest_first() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut feed = AlertFeed::new();
        let first = feed.raise(&mut rng);
        for _ in 0..MAX_ALERTS {
            feed.raise(&mut rng);
        }
        assert!(feed.alerts().iter().all(|a| a.id != first));
    }

    #[test]
    fn generated_alerts_start_new() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut feed = AlertFeed::new();
        feed.raise(&mut rng);
        assert_eq!(feed.alerts()[0].status, AlertStatus::New);
    }

    #[test]
    fn ids_are_monotonic_and_unique() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut feed = AlertFeed::new();
        let ids: Vec<u64> = (0..10).map(|_| feed.raise(&mut rng)).collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn dismiss_removes_exactly_one_preserving_order() {
        let mut rng = StdRng::seed_from_u64(43);
        let mut feed = AlertFeed::new();
        let ids: Vec<u64> = (0..5).map(|_| feed.raise(&mut rng)).collect();
        let victim = ids[2];

        assert!(feed.dismiss(victim));
        assert_eq!(feed.len(), 4);
        let remaining: Vec<u64> = feed.alerts().iter().map(|a| a.id).collect();
        // Newest-first order of the survivors is unchanged.
        assert_eq!(remaining, vec![ids[4], ids[3], ids[1], ids[0]]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut rng = StdRng::seed_from_u64(47);
        let mut feed = AlertFeed::seeded();
        let len = feed.len();
        assert!(!feed.dismiss(9999));
        assert_eq!(feed.len(), len);
    }

    #[test]
    fn maybe_raise_rate_roughly_ten_percent() {
        let mut rng = StdRng::seed_from_u64(53);
        let mut feed = AlertFeed::new();
        let mut raised = 0u32;
        let n = 20_000;
        for _ in 0..n {
            if feed.maybe_raise(&mut rng).is_some() {
                raised += 1;
            }
        }
        let rate = f64::from(raised) / f64::from(n);
        assert!((rate - SPAWN_PROBABILITY).abs() < 0.01, "rate {rate}");
    }

    #[test]
    fn seeded_feed_shape() {
        let feed = AlertFeed::seeded();
        assert!(!feed.is_empty());
        assert!(feed.len() <= MAX_ALERTS);
        // Seeds span handling states beyond `new`.
        assert!(feed
            .alerts()
            .iter()
            .any(|a| a.status == AlertStatus::InProgress));
        assert!(feed
            .alerts()
            .iter()
            .any(|a| a.status == AlertStatus::Acknowledged));
    }

    #[test]
    fn pool_sizes_are_stable() {
        assert_eq!(MESSAGES.len(), 12);
        assert_eq!(DETAILS.len(), 12);
        assert_eq!(AFFECTED_PARTS.len(), 10);
    }
}
