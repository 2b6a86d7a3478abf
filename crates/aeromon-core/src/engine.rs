//! Per-view telemetry engine.
//!
//! A [`MachineView`] owns everything one dashboard view displays: the metric
//! panel, the alert feed, and a view-local copy of the machine status. Each
//! periodic behavior runs on its own [`Cadence`]; the owning loop calls
//! [`MachineView::tick`] and whatever is due fires. Dropping the view drops
//! every cadence with it; there is no timer that can outlive its view.
//!
//! State is never shared between views: two dashboards for the same machine
//! each run their own independent simulation.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::alert::AlertFeed;
use crate::machine::{Machine, MachineStatus};
use crate::metric::{seed_metrics, Metric};
use crate::sim::{advance_machine_status, advance_metrics};

/// Metric simulation step interval.
pub const METRIC_INTERVAL: Duration = Duration::from_millis(3000);
/// Alert generator check interval.
pub const ALERT_INTERVAL: Duration = Duration::from_millis(10_000);
/// Machine status flip check interval.
pub const STATUS_INTERVAL: Duration = Duration::from_millis(30_000);
/// Wall-clock display refresh interval.
pub const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);
/// Info-panel slide rotation interval.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// A repeating deadline. `due` reports (and consumes) elapsed periods.
///
/// Deliberately passive: it never spawns anything. The owner polls it from
/// its own loop, so cancellation is simply dropping the owner.
#[derive(Debug, Clone)]
pub struct Cadence {
    period: Duration,
    last: Instant,
}

impl Cadence {
    /// A cadence whose first firing is one period from now.
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    /// A cadence anchored at an explicit instant (tests).
    pub fn starting_at(period: Duration, at: Instant) -> Self {
        Self { period, last: at }
    }

    /// True once per elapsed period. Re-arms on firing.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// Everything one live dashboard view owns.
pub struct MachineView {
    machine: &'static Machine,
    status: MachineStatus,
    metrics: Vec<Metric>,
    alerts: AlertFeed,
    rng: StdRng,
    metric_cadence: Cadence,
    alert_cadence: Cadence,
    status_cadence: Cadence,
    steps: u64,
}

impl MachineView {
    /// Mount a view for `machine`: seeded metrics, seeded alerts, the
    /// registry status as the starting local copy.
    pub fn new(machine: &'static Machine) -> Self {
        Self::with_rng(machine, StdRng::from_os_rng())
    }

    /// Mount with a caller-provided RNG (tests pass a seeded one).
    pub fn with_rng(machine: &'static Machine, rng: StdRng) -> Self {
        let now = Instant::now();
        Self {
            machine,
            status: machine.status,
            metrics: seed_metrics(),
            alerts: AlertFeed::seeded(),
            rng,
            metric_cadence: Cadence::starting_at(METRIC_INTERVAL, now),
            alert_cadence: Cadence::starting_at(ALERT_INTERVAL, now),
            status_cadence: Cadence::starting_at(STATUS_INTERVAL, now),
            steps: 0,
        }
    }

    /// Fire whatever cadences are due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.metric_cadence.due(now) {
            self.step();
        }
        if self.alert_cadence.due(now) {
            self.alerts.maybe_raise(&mut self.rng);
        }
        if self.status_cadence.due(now) {
            let next = advance_machine_status(self.status, &mut self.rng);
            if next != self.status {
                log::info!("machine {} status: {} -> {}", self.machine.id, self.status, next);
                self.status = next;
            }
        }
    }

    /// One metric simulation step, regardless of cadence.
    pub fn step(&mut self) {
        self.metrics = advance_metrics(&self.metrics, &mut self.rng);
        self.steps += 1;
    }

    /// Dismiss one alert by id.
    pub fn dismiss_alert(&mut self, id: u64) -> bool {
        self.alerts.dismiss(id)
    }

    pub fn machine(&self) -> &'static Machine {
        self.machine
    }

    /// The view-local status copy; may have drifted from the registry.
    pub fn status(&self) -> MachineStatus {
        self.status
    }

    /// Latest metric snapshot.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn alerts(&self) -> &AlertFeed {
        &self.alerts
    }

    /// Metric steps taken since mount.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
