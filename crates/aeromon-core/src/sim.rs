//! Simulation driver — randomized telemetry steps.
//!
//! Each step perturbs every metric by a bounded uniform delta, clamps the
//! result into the metric's operating range, rounds to one decimal, and
//! re-derives the status. The input collection is never mutated: callers get
//! a fresh snapshot each step, so a renderer holding the previous collection
//! keeps a consistent view.

use rand::Rng;

use crate::machine::MachineStatus;
use crate::metric::Metric;

/// Width of the uniform perturbation window: delta ∈ (-2.5, +2.5).
pub const STEP_SPAN: f64 = 5.0;

/// Probability that a status-flip check actually advances the machine status.
pub const STATUS_FLIP_PROBABILITY: f64 = 0.05;

/// Constrain `value` to the closed range `[min, max]`.
///
/// Idempotent: an in-range value passes through unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round to one decimal place, the resolution the gauges display.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Advance one metric by a single randomized step.
pub fn step_metric<R: Rng>(metric: &Metric, rng: &mut R) -> Metric {
    let delta = (rng.random::<f64>() - 0.5) * STEP_SPAN;
    let (min, max) = metric.kind.operating_range();
    let value = round_tenth(clamp(metric.value + delta, min, max));
    Metric::at(metric.kind, value)
}

/// Advance the whole metric panel by one step, returning a new snapshot.
pub fn advance_metrics<R: Rng>(metrics: &[Metric], rng: &mut R) -> Vec<Metric> {
    metrics.iter().map(|m| step_metric(m, rng)).collect()
}

/// One status-flip check: 5% chance to advance along
/// on → maintenance → off → on, otherwise unchanged.
///
/// This only ever touches a view-local copy; registry entries stay fixed.
pub fn advance_machine_status<R: Rng>(status: MachineStatus, rng: &mut R) -> MachineStatus {
    if rng.random::<f64>() < STATUS_FLIP_PROBABILITY {
        status.next()
    } else {
        status
    }
}
