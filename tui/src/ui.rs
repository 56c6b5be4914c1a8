//! Rendering.
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  AutoAI  [1] Home  [2] Live Dashboard  [3] Voice Agent  …           │
//!   ├─── page body ───────────────────────────────────────────────────────┤
//!   │                                                                     │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings, status)                                      │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Below `NARROW_WIDTH` columns the navigation collapses behind `[Tab] Menu`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Sparkline, Table, Wrap},
    Frame,
};

use autoai_catalog::{metrics, Catalog, BRAND};
use autoai_contracts::conversation::{LogIndicator, Message, MessageCategory, MessageRole, RiskLevel};
use autoai_contracts::fleet::{AgentStatus, Severity, Vehicle};
use autoai_contracts::page::Page;
use autoai_contracts::security::AlertStatus;
use autoai_contracts::showcase::CapaStatus;
use autoai_core::dashboard::{DashboardMode, DashboardView};
use autoai_core::transcript::ReplyState;
use autoai_core::voice::VoiceAgentView;
use autoai_core::PageView;

use crate::app::{App, InputMode};

/// Narrower terminals get the collapsed menu.
pub const NARROW_WIDTH: u16 = 140;

const ACCENT: Color = Color::Cyan;
const HEALTHY: Color = Color::Green;
const WARNING: Color = Color::Yellow;
const DANGER: Color = Color::Red;
const MUTED: Color = Color::DarkGray;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
}

fn key_hint(key: &str) -> Span<'static> {
    Span::styled(format!("[{}] ", key), Style::default().fg(ACCENT))
}

// ── Frame ────────────────────────────────────────────────────────────────────

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // page
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let catalog = app.shell.catalog();
    match app.shell.view() {
        PageView::Static(Page::Manufacturing) => render_manufacturing(f, chunks[1], catalog),
        PageView::Static(Page::Security) => render_security(f, chunks[1], catalog),
        PageView::Static(Page::Innovation) => render_innovation(f, chunks[1], catalog),
        PageView::Static(_) => render_landing(f, chunks[1], catalog),
        PageView::Dashboard(dashboard) => render_dashboard(f, chunks[1], catalog, dashboard),
        PageView::VoiceAgent(voice) => render_voice_agent(f, chunks[1], voice, app.input_mode),
    }

    if app.shell.menu_open() {
        render_menu(f, chunks[1], app.shell.current_page());
    }
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let current = app.shell.current_page();
    let mut spans = vec![
        Span::styled(format!("{} ", BRAND), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("Predictive Maintenance   ", Style::default().fg(MUTED)),
    ];

    if area.width < NARROW_WIDTH {
        spans.push(key_hint("Tab"));
        spans.push(Span::raw(format!("Menu  ·  {}", current.label())));
    } else {
        for page in Page::ALL {
            let style = if page == current {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!("[{}] {}", page.index() + 1, page.label()), style));
            spans.push(Span::raw("  "));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, body: Rect, current: Page) {
    let area = Rect {
        x: body.x + 1,
        y: body.y,
        width: 30.min(body.width.saturating_sub(2)),
        height: (Page::ALL.len() as u16 + 2).min(body.height),
    };
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let style = if *page == current {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                key_hint(&(page.index() + 1).to_string()),
                Span::styled(page.label(), style),
            ]))
        })
        .collect();
    f.render_widget(Clear, area);
    f.render_widget(List::new(items).block(panel("Menu")), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    if app.input_mode == InputMode::Editing {
        spans.extend([
            key_hint("Enter"),
            Span::raw("Send  "),
            key_hint("Esc"),
            Span::raw("Stop typing  "),
        ]);
    } else {
        spans.extend([
            key_hint("1-6"),
            Span::raw("Pages  "),
            key_hint("Tab"),
            Span::raw("Menu  "),
            key_hint("h"),
            Span::raw("Home  "),
            key_hint("v"),
            Span::raw("Voice Agent  "),
        ]);
        match app.shell.current_page() {
            Page::VoiceAgent => spans.extend([
                key_hint("←/→"),
                Span::raw("Scenario  "),
                key_hint("i"),
                Span::raw("Type  "),
                key_hint("b"),
                Span::raw("Log  "),
                key_hint("o"),
                Span::raw("Voice  "),
                key_hint("space"),
                Span::raw("Listen  "),
                key_hint("k"),
                Span::raw("Speak  "),
            ]),
            Page::Dashboard => spans.extend([
                key_hint("f"),
                Span::raw("Fleet/Single  "),
                key_hint("n"),
                Span::raw("Next vehicle  "),
            ]),
            _ => {}
        }
        spans.extend([key_hint("q"), Span::raw("Quit")]);
    }

    if let Some(status) = &app.status {
        spans.push(Span::styled(format!("   {}", status), Style::default().fg(WARNING)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
    );
    f.render_widget(footer, area);
}

// ── Landing ──────────────────────────────────────────────────────────────────

fn render_landing(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "AI-Powered Predictive Maintenance",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Autonomous agents that diagnose, schedule and close the loop with manufacturing.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for capability in &catalog.capabilities {
        lines.push(Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(ACCENT)),
            Span::styled(capability.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", capability.summary),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  Press "),
        key_hint("v"),
        Span::raw("to talk to the Voice Agent, or "),
        key_hint("2"),
        Span::raw("for the Live Dashboard."),
    ]));

    let body = Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel("Home"));
    f.render_widget(body, area);
}

// ── Dashboard ────────────────────────────────────────────────────────────────

fn health_color(score: u8) -> Color {
    match score {
        80..=u8::MAX => HEALTHY,
        65..=79 => WARNING,
        _ => DANGER,
    }
}

fn render_dashboard(f: &mut Frame, area: Rect, catalog: &Catalog, view: &DashboardView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    render_summary_cards(f, rows[0], view.vehicles());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    match view.mode() {
        DashboardMode::Fleet => render_fleet(f, cols[0], view),
        DashboardMode::Single => render_single_vehicle(f, cols[0], catalog, view),
    }
    render_dashboard_sidebar(f, cols[1], catalog);
}

fn render_summary_cards(f: &mut Frame, area: Rect, vehicles: &[Vehicle]) {
    let summary = metrics::fleet_summary(vehicles);
    let mean = summary
        .mean_health
        .map_or_else(|| "n/a".to_string(), |m| format!("{}%", m));
    let health = format!(
        "{}  ·  {}/{} healthy",
        mean,
        metrics::healthy_count(vehicles),
        summary.vehicle_count
    );
    let cards = [
        ("Active Vehicles", summary.vehicle_count.to_string(), ACCENT),
        ("Active Alerts", summary.active_alerts.to_string(), WARNING),
        ("Avg Health Score", health, HEALTHY),
        ("AI Agents Active", summary.agents_active.to_string(), Color::Magenta),
    ];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    for (i, (title, value, color)) in cards.into_iter().enumerate() {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(panel(title));
        f.render_widget(card, cols[i]);
    }
}

fn render_fleet(f: &mut Frame, area: Rect, view: &DashboardView) {
    let selected = view.selected_vehicle().map(|v| v.id.as_str());
    let rows: Vec<Row> = view
        .vehicles()
        .iter()
        .map(|v| {
            let marker = if Some(v.id.as_str()) == selected { "▸" } else { " " };
            let status = if v.is_healthy() { "healthy" } else { "attention" };
            Row::new(vec![
                Cell::from(format!("{} {}", marker, v.id)),
                Cell::from(v.model.clone()),
                Cell::from(v.location.clone()),
                Cell::from(Span::styled(
                    format!("{:>3}% {}", v.health_score, status),
                    Style::default().fg(health_color(v.health_score)),
                )),
                Cell::from(v.alerts.to_string()),
                Cell::from(v.next_service.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Length(15),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Vehicle", "Model", "Location", "Health", "Alerts", "Service"])
            .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD)),
    )
    .block(panel(DashboardMode::Fleet.label()));
    f.render_widget(table, area);
}

fn render_single_vehicle(f: &mut Frame, area: Rect, catalog: &Catalog, view: &DashboardView) {
    let Some(vehicle) = view.selected_vehicle() else {
        f.render_widget(Paragraph::new("No vehicles.").block(panel("Single Vehicle")), area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Min(4),
        ])
        .split(area);

    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}  {}", vehicle.id, vehicle.model),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}  ·  next service {}", vehicle.location, vehicle.next_service)),
        Line::from(format!("{} active alerts", vehicle.alerts)),
    ])
    .block(panel(DashboardMode::Single.label()));
    f.render_widget(info, rows[0]);

    let gauge = Gauge::default()
        .block(panel("Health"))
        .gauge_style(Style::default().fg(health_color(vehicle.health_score)))
        .percent(u16::from(vehicle.health_score.min(100)));
    f.render_widget(gauge, rows[1]);

    let telemetry = &catalog.engine_telemetry;
    let temps: Vec<u64> = telemetry.iter().map(|p| u64::from(p.temp)).collect();
    let latest_temp = telemetry.last().map_or(0, |p| p.temp);
    f.render_widget(
        Sparkline::default()
            .block(panel(&format!("Engine Temperature  {}°C", latest_temp)))
            .data(&temps)
            .style(Style::default().fg(WARNING)),
        rows[2],
    );

    // Sparklines take integers; plot decivolts.
    let volts: Vec<u64> = telemetry.iter().map(|p| (p.voltage * 10.0).round() as u64).collect();
    let latest_volts = telemetry.last().map_or(0.0, |p| p.voltage);
    f.render_widget(
        Sparkline::default()
            .block(panel(&format!("Battery Voltage  {:.1}V", latest_volts)))
            .data(&volts)
            .style(Style::default().fg(ACCENT)),
        rows[3],
    );
}

fn render_dashboard_sidebar(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(catalog.upcoming_services.len() as u16 * 2 + 2),
            Constraint::Length(catalog.security_alerts.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    let services: Vec<ListItem> = catalog
        .upcoming_services
        .iter()
        .map(|s| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<7}", s.day_label()), Style::default().fg(ACCENT)),
                    Span::raw(s.service.clone()),
                ]),
                Line::from(Span::styled(
                    format!("       {}  ·  {}", s.vehicle, s.location),
                    Style::default().fg(MUTED),
                )),
            ])
        })
        .collect();
    f.render_widget(List::new(services).block(panel("Upcoming Services")), rows[0]);

    let alerts: Vec<ListItem> = catalog
        .security_alerts
        .iter()
        .map(|a| {
            let color = match a.severity {
                Severity::High => DANGER,
                Severity::Medium => WARNING,
                Severity::Low => HEALTHY,
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::raw(a.message.clone()),
                Span::styled(format!("  {}", a.time), Style::default().fg(MUTED)),
            ]))
        })
        .collect();
    f.render_widget(List::new(alerts).block(panel("Security Monitor")), rows[1]);

    let agents: Vec<ListItem> = catalog
        .agent_nodes
        .iter()
        .map(|n| {
            let (dot, color) = match n.status {
                AgentStatus::Active => ("●", HEALTHY),
                AgentStatus::Pending => ("◌", WARNING),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", dot), Style::default().fg(color)),
                Span::raw(n.name.clone()),
            ]))
        })
        .collect();
    f.render_widget(List::new(agents).block(panel("Master Agent Console")), rows[2]);
}

// ── Voice agent ──────────────────────────────────────────────────────────────

fn category_color(category: MessageCategory) -> Color {
    match category {
        MessageCategory::Urgent => DANGER,
        MessageCategory::Ueba => Color::Magenta,
        MessageCategory::Rca => WARNING,
        MessageCategory::Confirmation => HEALTHY,
        MessageCategory::Alert => WARNING,
        MessageCategory::Info => ACCENT,
    }
}

/// Split `text` on `**` markers into plain and bold spans.
pub fn emphasis_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let style = if i % 2 == 1 { base.add_modifier(Modifier::BOLD) } else { base };
            Span::styled(part.to_string(), style)
        })
        .collect()
}

fn message_lines(msg: &Message) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let (speaker, speaker_color) = match msg.role {
        MessageRole::Agent => ("AutoAI Agent", ACCENT),
        MessageRole::User => ("You", Color::White),
    };
    let mut heading = vec![
        Span::styled(speaker, Style::default().fg(speaker_color).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", msg.timestamp), Style::default().fg(MUTED)),
    ];
    if let Some(category) = msg.category {
        if let Some(banner) = category.banner() {
            heading.push(Span::styled(
                format!("  {}", banner),
                Style::default()
                    .fg(category_color(category))
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }
    lines.push(Line::from(heading));

    let body_style = match msg.category {
        Some(category) if msg.role == MessageRole::Agent => Style::default().fg(category_color(category)),
        _ => Style::default(),
    };
    let indent = match msg.role {
        MessageRole::Agent => "│ ",
        MessageRole::User => "  ",
    };
    for text_line in msg.content.lines() {
        let mut spans = vec![Span::styled(indent, body_style)];
        spans.extend(emphasis_spans(text_line, Style::default()));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines
}

fn render_voice_agent(f: &mut Frame, area: Rect, voice: &VoiceAgentView, mode: InputMode) {
    let log_width = if voice.show_behavior_log() { 44 } else { 0 };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(30), Constraint::Length(log_width)])
        .split(area);

    render_scenario_panel(f, cols[0], voice);
    render_conversation(f, cols[1], voice, mode);
    if voice.show_behavior_log() {
        render_behavior_log(f, cols[2], voice);
    }
}

fn render_scenario_panel(f: &mut Frame, area: Rect, voice: &VoiceAgentView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(voice.scenarios().len() as u16 + 2), Constraint::Min(6)])
        .split(area);

    let current = &voice.scenario().id;
    let items: Vec<ListItem> = voice
        .scenarios()
        .iter()
        .map(|s| {
            let style = if &s.id == current {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{} {}", s.icon.glyph(), s.name), style)))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Scenarios")), rows[0]);

    let on_off = |on: bool| if on { Span::styled("ON", Style::default().fg(HEALTHY)) } else { Span::styled("OFF", Style::default().fg(MUTED)) };
    let avatar = if voice.avatar_active() { "◉  active" } else { "○  idle" };
    let awaiting = voice.transcript().state() == ReplyState::AwaitingResponse;
    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            avatar,
            Style::default()
                .fg(if voice.avatar_active() { ACCENT } else { MUTED })
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::raw("Voice mode  "), on_off(voice.voice_mode())]),
        Line::from(vec![Span::raw("Listening   "), on_off(voice.listening())]),
        Line::from(vec![Span::raw("Speaking    "), on_off(voice.speaking())]),
        Line::from(""),
        Line::from(Span::styled(
            if awaiting { "Agent is typing…" } else { "" },
            Style::default().fg(MUTED),
        )),
    ])
    .block(panel("Agent"));
    f.render_widget(status, rows[1]);
}

fn render_conversation(f: &mut Frame, area: Rect, voice: &VoiceAgentView, mode: InputMode) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let lines: Vec<Line> = voice
        .transcript()
        .messages()
        .iter()
        .flat_map(message_lines)
        .collect();

    // Keep the latest message in view.
    let inner = panel("").inner(rows[0]);
    let transcript = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total_rows = transcript.line_count(inner.width);
    let scroll = u16::try_from(total_rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX);
    let transcript = transcript
        .scroll((scroll, 0))
        .block(panel(&voice.scenario().name));
    f.render_widget(transcript, rows[0]);

    let (title, style) = match mode {
        InputMode::Editing => ("Message (Enter to send, Esc to stop)", Style::default().fg(ACCENT)),
        InputMode::Normal => ("Message (press i to type)", Style::default().fg(MUTED)),
    };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(style);
    let inner = block.inner(rows[1]);
    let text = Line::from(voice.transcript().composer().to_string());
    let typed = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let (scroll, cursor) = composer_window(typed, inner.width);
    let composer = Paragraph::new(text).scroll((0, scroll)).block(block);
    f.render_widget(composer, rows[1]);

    if mode == InputMode::Editing {
        f.set_cursor_position((inner.x.saturating_add(cursor), inner.y));
    }
}

/// Horizontal scroll and cursor column for a composer holding `typed`
/// display columns in a box `width` columns wide. The tail of the text
/// stays visible with one free cell for the cursor.
fn composer_window(typed: u16, width: u16) -> (u16, u16) {
    let visible = width.saturating_sub(1);
    let scroll = typed.saturating_sub(visible);
    (scroll, typed - scroll)
}

fn indicator_style(indicator: LogIndicator) -> (&'static str, Color) {
    match indicator {
        LogIndicator::Settled => ("✔", HEALTHY),
        LogIndicator::Flagged => ("!", DANGER),
        LogIndicator::Elevated => ("▲", DANGER),
        LogIndicator::Watch => ("●", WARNING),
        LogIndicator::Neutral => ("·", MUTED),
    }
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Critical | RiskLevel::High => DANGER,
        RiskLevel::Medium => WARNING,
        RiskLevel::Low => HEALTHY,
    }
}

fn render_behavior_log(f: &mut Frame, area: Rect, voice: &VoiceAgentView) {
    let items: Vec<ListItem> = voice
        .behavior_log()
        .iter()
        .map(|entry| {
            let (marker, color) = indicator_style(entry.indicator());
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", marker), Style::default().fg(color)),
                    Span::raw(entry.action.clone()),
                ]),
                Line::from(vec![
                    Span::styled(format!("  {}  ", entry.timestamp), Style::default().fg(MUTED)),
                    Span::raw(entry.status.clone()),
                    Span::styled(format!("  {}", entry.risk.label()), Style::default().fg(risk_color(entry.risk))),
                ]),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Behavior Log")), area);
}

// ── Manufacturing ────────────────────────────────────────────────────────────

fn render_manufacturing(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Closed-loop RCA/CAPA",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from("Recurring field defects traced to root cause and routed to quality, design and suppliers."),
    ])
    .wrap(Wrap { trim: false })
    .block(panel("Manufacturing Insights"));
    f.render_widget(intro, rows[0]);

    let table_rows: Vec<Row> = catalog
        .defects
        .iter()
        .map(|d| {
            let color = match d.capa_status {
                CapaStatus::Open => DANGER,
                CapaStatus::InProgress => WARNING,
                CapaStatus::Closed => HEALTHY,
            };
            Row::new(vec![
                Cell::from(d.code.clone()),
                Cell::from(d.component.clone()),
                Cell::from(d.affected_vehicles.to_string()),
                Cell::from(d.supplier.clone()),
                Cell::from(d.root_cause.clone()),
                Cell::from(Span::styled(d.capa_status.label(), Style::default().fg(color))),
                Cell::from(d.report_id.clone()),
            ])
        })
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(17),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(24),
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Defect", "Component", "Vehicles", "Supplier", "Root cause", "CAPA", "Report"])
            .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD)),
    )
    .block(panel("Defect Register"));
    f.render_widget(table, rows[1]);
}

// ── Security ─────────────────────────────────────────────────────────────────

fn render_security(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    let anomaly = &catalog.live_anomaly;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(anomaly.title.clone(), Style::default().fg(WARNING).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", anomaly.timestamp), Style::default().fg(MUTED)),
        ]),
        Line::from(anomaly.pattern.clone()),
    ];
    for (signal, check) in anomaly.signals.iter().zip(&anomaly.checks) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<58}", signal), Style::default().fg(Color::Gray)),
            Span::styled(format!("✔ {}", check), Style::default().fg(HEALTHY)),
        ]));
    }
    lines.push(Line::from(Span::styled(anomaly.assessment.clone(), Style::default().fg(MUTED))));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel("UEBA Live Alert")),
        rows[0],
    );

    let metric_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);
    for (metric, col) in catalog.security_metrics.iter().zip(metric_cols.iter()) {
        let card = Paragraph::new(Span::styled(
            metric.value.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .block(panel(&metric.label));
        f.render_widget(card, *col);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(catalog.agent_activity.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(cols[0]);

    let activity: Vec<ListItem> = catalog
        .agent_activity
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", a.time), Style::default().fg(MUTED)),
                Span::styled(format!("{:<17}", a.agent), Style::default().fg(ACCENT)),
                Span::raw(a.action.clone()),
                Span::styled(format!("  {}", a.risk.label()), Style::default().fg(risk_color(a.risk))),
            ]))
        })
        .collect();
    f.render_widget(List::new(activity).block(panel("Agent Activity")), left[0]);

    let actions: Vec<ListItem> = catalog
        .preventive_actions
        .iter()
        .map(|p| {
            let (mark, color) = if p.active { ("✔", HEALTHY) } else { ("○", MUTED) };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::raw(p.action.clone()),
            ]))
        })
        .collect();
    f.render_widget(List::new(actions).block(panel("Preventive Actions")), left[1]);

    let history: Vec<ListItem> = catalog
        .alert_history
        .iter()
        .map(|a| {
            let status_color = match a.status {
                AlertStatus::Verified => ACCENT,
                AlertStatus::Cleared => HEALTHY,
                AlertStatus::Resolved => Color::Magenta,
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(a.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", a.time), Style::default().fg(MUTED)),
                    Span::styled(
                        format!("  risk {}", a.risk_score),
                        Style::default().fg(risk_color(a.risk_band())),
                    ),
                    Span::styled(format!("  {}", a.status.label()), Style::default().fg(status_color)),
                ]),
                Line::from(Span::styled(format!("  {}", a.description), Style::default().fg(Color::Gray))),
                Line::from(Span::styled(format!("  → {}", a.action), Style::default().fg(MUTED))),
            ])
        })
        .collect();
    f.render_widget(List::new(history).block(panel("Alert History")), cols[1]);
}

// ── Innovation ───────────────────────────────────────────────────────────────

fn render_innovation(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let mut lines = vec![Line::from("")];
    for feature in &catalog.innovation_features {
        let color = match feature.maturity.as_str() {
            "live" => HEALTHY,
            "pilot" => WARNING,
            _ => MUTED,
        };
        lines.push(Line::from(vec![
            Span::styled(feature.title.clone(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  [{}]", feature.maturity), Style::default().fg(color)),
        ]));
        lines.push(Line::from(format!("  {}", feature.summary)));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel("Innovation Lab")),
        area,
    );
}

// ── Tests ────────────────────────────────────────────────────────────────────
