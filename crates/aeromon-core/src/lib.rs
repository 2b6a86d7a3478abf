//! # aeromon-core
//!
//! **A blower fleet in a box.**
//!
//! `aeromon-core` is the telemetry engine behind the aeromon dashboard. All
//! "live" data is synthesized client-side: a bounded random walk perturbs
//! each metric on a fixed cadence, a threshold ladder derives its
//! qualitative status, and a weighted generator occasionally raises alerts.
//! There is no sensor feed, no backend, and no persistence: state lives
//! exactly as long as the view that owns it.
//!
//! ## Quick Start
//!
//! ```
//! use aeromon_core::{machine_by_id, MachineView};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let machine = machine_by_id(1).expect("machine 1 is registered");
//! let mut view = MachineView::with_rng(machine, StdRng::seed_from_u64(42));
//!
//! // One simulation step: every metric moves, stays in range, reclassifies.
//! view.step();
//! for metric in view.metrics() {
//!     let (lo, hi) = metric.kind.operating_range();
//!     assert!(metric.value >= lo && metric.value <= hi);
//! }
//! ```
//!
//! ## Architecture
//!
//! Registry → MachineView (metrics + alerts + status copy) → renderers
//!
//! Each view owns its state exclusively and advances through [`Cadence`]s
//! polled by the owning loop: metric steps every 3 s, alert checks every
//! 10 s, status-flip checks every 30 s. Dropping the view cancels
//! everything; no timer outlives its owner.

pub mod alert;
pub mod engine;
pub mod history;
pub mod info;
pub mod machine;
pub mod metric;
pub mod sim;

pub use alert::{
    Alert, AlertFeed, AlertStatus, Severity, AFFECTED_PARTS, DETAILS, MAX_ALERTS, MESSAGES,
    SEVERITY_WEIGHTS, SPAWN_PROBABILITY,
};
pub use engine::{
    Cadence, MachineView, ALERT_INTERVAL, CLOCK_INTERVAL, METRIC_INTERVAL, SLIDE_INTERVAL,
    STATUS_INTERVAL,
};
pub use history::{
    generate_history, history_variance, HistoryPoint, TimeRange, ALL_RANGES,
};
pub use info::{next_slide, InfoSlide, INFO_SLIDES};
pub use machine::{machine_by_id, machines, Machine, MachineStatus, MACHINES};
pub use metric::{seed_metrics, GaugeKind, Metric, MetricKind, MetricStatus, ALL_METRICS};
pub use sim::{
    advance_machine_status, advance_metrics, clamp, round_tenth, step_metric,
    STATUS_FLIP_PROBABILITY, STEP_SPAN,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
