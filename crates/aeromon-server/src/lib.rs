//! HTTP status server for the blower fleet.
//!
//! Serves the same simulated telemetry the TUI renders, as JSON: machine
//! records, live metric snapshots, and the alert feed. One background task
//! ticks every machine view once a second; it is aborted when the server
//! stops, so no simulation outlives the process serving it.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Serialize;
use tokio::sync::Mutex;

use aeromon_core::{machines, Machine, MachineStatus, MachineView};

/// Shared server state: one independently simulated view per machine.
struct AppState {
    views: Vec<Mutex<MachineView>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            views: machines().iter().map(|m| Mutex::new(MachineView::new(m))).collect(),
        }
    }

    /// The view index for a machine id, if registered.
    async fn view_for(&self, id: u32) -> Option<&Mutex<MachineView>> {
        for view in &self.views {
            if view.lock().await.machine().id == id {
                return Some(view);
            }
        }
        None
    }
}

#[derive(Serialize)]
struct MachineEntry {
    id: u32,
    name: &'static str,
    status: MachineStatus,
    location: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct MachinesResponse {
    machines: Vec<MachineEntry>,
    total: usize,
    operational: usize,
    maintenance: usize,
    offline: usize,
}

#[derive(Serialize)]
struct MachineDetailResponse {
    #[serde(flatten)]
    machine: Machine,
    /// Live (view-local) status; can differ from the registry record.
    live_status: MachineStatus,
    simulation_steps: u64,
}

#[derive(Serialize)]
struct MetricEntry {
    name: &'static str,
    value: f64,
    unit: &'static str,
    status: aeromon_core::MetricStatus,
    min: f64,
    max: f64,
    gauge: aeromon_core::GaugeKind,
}

#[derive(Serialize)]
struct MetricsResponse {
    machine_id: u32,
    metrics: Vec<MetricEntry>,
}

#[derive(Serialize)]
struct AlertsResponse {
    machine_id: u32,
    total: usize,
    alerts: Vec<aeromon_core::Alert>,
}

#[derive(Serialize)]
struct DismissResponse {
    machine_id: u32,
    alert_id: u64,
    dismissed: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    machines_total: usize,
    machines_operational: usize,
    alerts_active: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn not_found(what: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: what.to_string(),
        }),
    )
}

async fn handle_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Aeromon Server",
        "version": aeromon_core::VERSION,
        "machines": machines().len(),
        "endpoints": {
            "/": "This API index",
            "/machines": "Fleet overview with summary counts",
            "/machines/{id}": "Machine detail (registry record + live status)",
            "/machines/{id}/metrics": "Current metric snapshot with derived statuses",
            "/machines/{id}/alerts": "Current alert feed, newest first",
            "DELETE /machines/{id}/alerts/{alert_id}": "Dismiss one alert",
            "/health": "Fleet health roll-up",
        },
        "examples": {
            "fleet": "/machines",
            "metrics": "/machines/1/metrics",
            "alerts": "/machines/1/alerts",
        }
    }))
}

async fn handle_machines(State(state): State<Arc<AppState>>) -> Json<MachinesResponse> {
    let mut entries = Vec::with_capacity(state.views.len());
    for view in &state.views {
        let view = view.lock().await;
        let m = view.machine();
        entries.push(MachineEntry {
            id: m.id,
            name: m.name,
            status: view.status(),
            location: m.location,
            description: m.description,
        });
    }

    let count = |s: MachineStatus| entries.iter().filter(|e| e.status == s).count();
    Json(MachinesResponse {
        total: entries.len(),
        operational: count(MachineStatus::On),
        maintenance: count(MachineStatus::Maintenance),
        offline: count(MachineStatus::Off),
        machines: entries,
    })
}

async fn handle_machine(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MachineDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(view) = state.view_for(id).await else {
        return Err(not_found(&format!("machine {id} not found")));
    };
    let view = view.lock().await;
    Ok(Json(MachineDetailResponse {
        machine: view.machine().clone(),
        live_status: view.status(),
        simulation_steps: view.steps(),
    }))
}

async fn handle_metrics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MetricsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(view) = state.view_for(id).await else {
        return Err(not_found(&format!("machine {id} not found")));
    };
    let view = view.lock().await;
    Ok(Json(MetricsResponse {
        machine_id: id,
        metrics: view.metrics().iter().map(metric_entry).collect(),
    }))
}

fn metric_entry(m: &aeromon_core::Metric) -> MetricEntry {
    let (min, max) = m.kind.display_range();
    MetricEntry {
        name: m.kind.label(),
        value: m.value,
        unit: m.kind.unit(),
        status: m.status,
        min,
        max,
        gauge: m.kind.gauge_kind(),
    }
}

async fn handle_alerts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<AlertsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(view) = state.view_for(id).await else {
        return Err(not_found(&format!("machine {id} not found")));
    };
    let view = view.lock().await;
    let alerts = view.alerts().alerts().to_vec();
    Ok(Json(AlertsResponse {
        machine_id: id,
        total: alerts.len(),
        alerts,
    }))
}

async fn handle_dismiss(
    State(state): State<Arc<AppState>>,
    Path((id, alert_id)): Path<(u32, u64)>,
) -> Result<Json<DismissResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(view) = state.view_for(id).await else {
        return Err(not_found(&format!("machine {id} not found")));
    };
    let mut view = view.lock().await;
    if !view.dismiss_alert(alert_id) {
        return Err(not_found(&format!(
            "alert {alert_id} not found on machine {id}"
        )));
    }
    Ok(Json(DismissResponse {
        machine_id: id,
        alert_id,
        dismissed: true,
    }))
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut operational = 0;
    let mut alerts_active = 0;
    for view in &state.views {
        let view = view.lock().await;
        if view.status() == MachineStatus::On {
            operational += 1;
        }
        alerts_active += view.alerts().len();
    }
    Json(HealthResponse {
        status: if operational > 0 { "healthy" } else { "degraded" }.to_string(),
        machines_total: state.views.len(),
        machines_operational: operational,
        alerts_active,
    })
}

/// Build the axum router.
fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/machines", get(handle_machines))
        .route("/machines/{id}", get(handle_machine))
        .route("/machines/{id}/metrics", get(handle_metrics))
        .route("/machines/{id}/alerts", get(handle_alerts))
        .route("/machines/{id}/alerts/{alert_id}", delete(handle_dismiss))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP status server.
///
/// Spawns the once-a-second simulation ticker, serves until the listener
/// dies, then aborts the ticker so nothing keeps mutating dropped state.
pub async fn run_server(host: &str, port: u16) {
    let state = Arc::new(AppState::new());

    let ticker_state = Arc::clone(&state);
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            interval.tick().await;
            let now = Instant::now();
            for view in &ticker_state.views {
                view.lock().await.tick(now);
            }
        }
    });

    let app = build_router(state);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    log::info!("aeromon server listening on {addr}");
    axum::serve(listener, app).await.unwrap();

    ticker.abort();
}
