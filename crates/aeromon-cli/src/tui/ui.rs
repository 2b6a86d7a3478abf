//! TUI rendering — single-machine dashboard.
//!
//! ┌──────────────────────────────────────────────────────┐
//! │  Blower #IDS-2023   ● operational        12:34       │
//! ├───────────────┬──────────────────────┬───────────────┤
//! │  Temperature  │  Temperature · Day   │  Alerts       │
//! │  ▓▓▓▓▓░ 72.4  │  ⡠⠔⠒⠢⡀ chart        │  ▸ high …     │
//! │  Pressure     │                      │    medium …   │
//! │  ▓▓▓░░░ 2.4   ├──────────────────────┤───────────────┤
//! │  ...          │  About the Machine   │  Detail of    │
//! │               │  rotating info text  │  selection    │
//! ├───────────────┴──────────────────────┴───────────────┤
//! │  q quit · ←/→ machine · d dismiss · m metric · …     │
//! └──────────────────────────────────────────────────────┘

use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::*};

use aeromon_core::{
    history_variance, MachineStatus, MetricStatus, Severity, INFO_SLIDES,
};

use super::app::{format_age, App};

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(10),   // main
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], app);
    draw_main(f, rows[1], app);
    draw_keys(f, rows[2]);
}

fn machine_color(status: MachineStatus) -> Color {
    match status {
        MachineStatus::On => Color::Green,
        MachineStatus::Maintenance => Color::Yellow,
        MachineStatus::Off => Color::Red,
    }
}

fn metric_color(status: MetricStatus) -> Color {
    match status {
        MetricStatus::Critical => Color::Red,
        MetricStatus::Warning => Color::Yellow,
        MetricStatus::Optimal => Color::Green,
        MetricStatus::Normal => Color::Blue,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Blue,
    }
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let status = view.status();
    let paused = if app.is_paused() { "  ⏸ paused" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", view.machine().name),
                Style::default().bold().fg(Color::Cyan),
            ),
            Span::styled("● ", Style::default().fg(machine_color(status))),
            Span::raw(status.to_string()),
            Span::styled(
                format!("  {}  step #{}{paused} ", app.clock(), view.steps()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

    f.render_widget(block, area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(42),
            Constraint::Percentage(30),
        ])
        .split(area);

    draw_gauges(f, cols[0], app);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(cols[1]);
    draw_chart(f, center[0], app);
    draw_info(f, center[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(cols[2]);
    draw_alerts(f, right[0], app);
    draw_alert_detail(f, right[1], app);
}

fn draw_gauges(f: &mut Frame, area: Rect, app: &App) {
    let metrics = app.view().metrics();
    let outer = Block::default().borders(Borders::ALL).title(" Machine Status ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); metrics.len()])
        .split(inner);

    for (metric, slot) in metrics.iter().zip(slots.iter()) {
        let color = metric_color(metric.status);
        let gauge = Gauge::default()
            .block(Block::default().title(Line::from(vec![
                Span::raw(metric.kind.label()),
                Span::styled(
                    format!("  {}", metric.status),
                    Style::default().fg(color),
                ),
            ])))
            .gauge_style(Style::default().fg(color))
            .ratio(metric.gauge_ratio())
            .label(format!("{:.1} {}", metric.value, metric.kind.unit()));
        f.render_widget(gauge, *slot);
    }
}

fn draw_chart(f: &mut Frame, area: Rect, app: &App) {
    let points = app.chart();
    let metric = app.chart_metric();
    let range = app.chart_range();

    if points.is_empty() {
        let block = Block::default().borders(Borders::ALL).title(" Historical Data ");
        f.render_widget(block, area);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();

    let min_val = points.iter().map(|p| p.value).fold(f64::MAX, f64::min);
    let max_val = points.iter().map(|p| p.value).fold(f64::MIN, f64::max);
    let pad = (history_variance(metric) / 4.0).max(0.1);
    let y_min = min_val - pad;
    let y_max = max_val + pad;

    let latest = points.last().map(|p| p.value).unwrap_or_default();
    let datasets = vec![
        Dataset::default()
            .name(format!("{latest:.1} {}", metric.unit()))
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(Color::Cyan))
            .data(&data),
    ];

    let first_label = points
        .first()
        .map(|p| range.format_point(DateTime::<Local>::from(p.at)))
        .unwrap_or_default();
    let last_label = points
        .last()
        .map(|p| range.format_point(DateTime::<Local>::from(p.at)))
        .unwrap_or_default();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Historical Data — {metric} · {range} ")),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len() - 1).max(1) as f64])
                .labels(vec![Line::from(first_label), Line::from(last_label)]),
        )
        .y_axis(Axis::default().bounds([y_min, y_max]).labels(vec![
            Line::from(format!("{y_min:.1}")),
            Line::from(format!("{y_max:.1}")),
        ]));

    f.render_widget(chart, area);
}

fn draw_info(f: &mut Frame, area: Rect, app: &App) {
    let slide = &INFO_SLIDES[app.slide() % INFO_SLIDES.len()];

    let dots: String = (0..INFO_SLIDES.len())
        .map(|i| if i == app.slide() { '●' } else { '○' })
        .collect();

    let text = vec![
        Line::from(Span::styled(
            slide.title,
            Style::default().bold().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(slide.content),
        Line::from(""),
        Line::from(Span::styled(dots, Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Machine Info ");
    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
    f.render_widget(p, area);
}

fn draw_alerts(f: &mut Frame, area: Rect, app: &App) {
    let alerts = app.view().alerts().alerts();
    let now = chrono::Utc::now();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Alerts ({}) ", alerts.len()));

    if alerts.is_empty() {
        let p = Paragraph::new("No active alerts")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = alerts
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let selected = i == app.alert_cursor();
            let pointer = if selected { "▸" } else { " " };
            let line = Line::from(vec![
                Span::raw(format!("{pointer} ")),
                Span::styled("▲ ", Style::default().fg(severity_color(alert.severity))),
                Span::raw(alert.message),
                Span::styled(
                    format!("  {} · {}", format_age(alert.raised_at, now), alert.status),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let item = ListItem::new(line);
            if selected {
                item.style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn draw_alert_detail(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Alert Detail ");

    let Some(alert) = app.view().alerts().alerts().get(app.alert_cursor()) else {
        let p = Paragraph::new("Select an alert")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(p, area);
        return;
    };

    let text = vec![
        Line::from(Span::styled(alert.message, Style::default().bold())),
        Line::from(vec![
            Span::styled(
                alert.severity.to_string(),
                Style::default().fg(severity_color(alert.severity)).bold(),
            ),
            Span::styled(
                format!(" · {} · {}", alert.status, format_age(alert.raised_at, chrono::Utc::now())),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Affected: ", Style::default().fg(Color::Cyan)),
            Span::raw(alert.affected_part),
        ]),
        Line::from(""),
        Line::from(alert.details),
    ];

    let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
    f.render_widget(p, area);
}

fn draw_keys(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(
        " q quit   p pause   ←/→ machine   ↑/↓ alert   d dismiss   m metric   t range   i slide",
    )
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}
