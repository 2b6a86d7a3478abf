//! TUI application state and event loop.
//!
//! Design: one machine view at a time. Every periodic behavior (metric
//! steps, alert checks, status flips, the clock, the info slides) runs off
//! cadences polled from this single loop, so nothing ticks once the view is
//! gone. Switching machines drops the old view whole and mounts a fresh one.

use std::io;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use aeromon_core::{
    generate_history, machines, next_slide, Cadence, HistoryPoint, Machine, MachineView,
    MetricKind, TimeRange, ALL_METRICS, CLOCK_INTERVAL, SLIDE_INTERVAL,
};

// ---------------------------------------------------------------------------
// Utility functions
// ---------------------------------------------------------------------------

/// Human age of an alert: "32s ago", "5m ago", "2h ago", "1d ago".
pub fn format_age(raised_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - raised_at).num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s ago")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}

/// Wrap-around index arithmetic for machine navigation.
pub fn offset_index(idx: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((idx as isize + delta) % len + len) % len) as usize
}

/// The metric after `current`, in gauge-panel order, wrapping.
pub fn next_metric(current: MetricKind) -> MetricKind {
    let idx = ALL_METRICS.iter().position(|&k| k == current).unwrap_or(0);
    ALL_METRICS[(idx + 1) % ALL_METRICS.len()]
}

fn current_clock() -> String {
    Local::now().format("%H:%M").to_string()
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    view: MachineView,
    machine_index: usize,
    running: bool,
    paused: bool,
    clock: String,
    clock_cadence: Cadence,
    slide: usize,
    slide_cadence: Cadence,
    chart_metric: MetricKind,
    chart_range: TimeRange,
    chart: Vec<HistoryPoint>,
    alert_cursor: usize,
}

impl App {
    pub fn new(machine: &'static Machine) -> Self {
        let machine_index = machines()
            .iter()
            .position(|m| m.id == machine.id)
            .unwrap_or(0);
        let chart_metric = MetricKind::Temperature;
        let chart_range = TimeRange::Day;

        Self {
            view: MachineView::new(machine),
            machine_index,
            running: true,
            paused: false,
            clock: current_clock(),
            clock_cadence: Cadence::new(CLOCK_INTERVAL),
            slide: 0,
            slide_cadence: Cadence::new(SLIDE_INTERVAL),
            chart_metric,
            chart_range,
            chart: regenerate_chart(chart_metric, chart_range),
            alert_cursor: 0,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key.code);
            }

            let now = Instant::now();
            if !self.paused {
                self.view.tick(now);
            }
            if self.clock_cadence.due(now) {
                self.clock = current_clock();
            }
            if self.slide_cadence.due(now) {
                self.slide = next_slide(self.slide);
            }
            self.clamp_cursor();
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('p') => self.paused = !self.paused,
            KeyCode::Left => self.switch_machine(-1),
            KeyCode::Right => self.switch_machine(1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.alert_cursor = self.alert_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.alert_cursor += 1;
                self.clamp_cursor();
            }
            KeyCode::Char('d') | KeyCode::Char('x') => self.dismiss_selected(),
            KeyCode::Char('m') => {
                self.chart_metric = next_metric(self.chart_metric);
                self.chart = regenerate_chart(self.chart_metric, self.chart_range);
            }
            KeyCode::Char('t') => {
                self.chart_range = self.chart_range.next();
                self.chart = regenerate_chart(self.chart_metric, self.chart_range);
            }
            KeyCode::Char('i') => self.slide = next_slide(self.slide),
            _ => {}
        }
    }

    /// Drop the current view (all its cadences with it) and mount the
    /// neighboring machine fresh.
    fn switch_machine(&mut self, delta: isize) {
        let fleet = machines();
        self.machine_index = offset_index(self.machine_index, delta, fleet.len());
        self.view = MachineView::new(&fleet[self.machine_index]);
        self.alert_cursor = 0;
        self.chart = regenerate_chart(self.chart_metric, self.chart_range);
    }

    fn dismiss_selected(&mut self) {
        let id = self.view.alerts().alerts().get(self.alert_cursor).map(|a| a.id);
        if let Some(id) = id {
            self.view.dismiss_alert(id);
            self.clamp_cursor();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.view.alerts().len();
        if len == 0 {
            self.alert_cursor = 0;
        } else if self.alert_cursor >= len {
            self.alert_cursor = len - 1;
        }
    }

    // --- Accessors for rendering ---

    pub fn view(&self) -> &MachineView {
        &self.view
    }
    pub fn clock(&self) -> &str {
        &self.clock
    }
    pub fn is_paused(&self) -> bool {
        self.paused
    }
    pub fn slide(&self) -> usize {
        self.slide
    }
    pub fn chart_metric(&self) -> MetricKind {
        self.chart_metric
    }
    pub fn chart_range(&self) -> TimeRange {
        self.chart_range
    }
    pub fn chart(&self) -> &[HistoryPoint] {
        &self.chart
    }
    pub fn alert_cursor(&self) -> usize {
        self.alert_cursor
    }
}

fn regenerate_chart(metric: MetricKind, range: TimeRange) -> Vec<HistoryPoint> {
    generate_history(metric, range, Utc::now(), &mut rand::rng())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
