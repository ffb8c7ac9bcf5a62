//! Landing screen: product header, backend status, palette preview

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::BackendStatus;

use super::{layout, theme};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = layout::centered_card(area, 64, 22);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(6), // system status card
            Constraint::Length(8), // palette card
            Constraint::Length(1), // spacer
            Constraint::Length(2), // navigation
        ])
        .split(card);

    draw_header(frame, chunks[0]);
    draw_backend_status(frame, chunks[1], &app.state.backend);
    draw_palette(frame, chunks[2]);
    draw_navigation(frame, chunks[4]);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "🗾 Nijouzu",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Learn Japanese",
            Style::default().fg(theme::DIM),
        )),
        Line::from(Span::styled(
            "Designed with traditional Japanese colors: 赤 黒 白 青",
            Style::default().fg(theme::DIM),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_backend_status(frame: &mut Frame, area: Rect, backend: &BackendStatus) {
    let block = Block::default()
        .title(" System Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::DIM));

    let lines = match backend {
        BackendStatus::Checking => vec![Line::from(Span::styled(
            "⏳ Connecting to backend...",
            Style::default().fg(theme::DIM),
        ))],
        BackendStatus::Connected { status, checked_at } => vec![
            Line::from(Span::styled(
                "✅ Backend Connected Successfully!",
                Style::default().fg(ratatui::style::Color::Green),
            )),
            Line::from(format!("Message: {}", status.message)),
            Line::from(format!("Status: {}", status.status)),
            Line::from(Span::styled(
                format!("Checked at {}", checked_at.format("%H:%M:%S")),
                Style::default().fg(theme::DIM),
            )),
        ],
        BackendStatus::Error { reason, checked_at } => vec![
            Line::from(Span::styled(
                format!("❌ Connection Error: {reason}"),
                Style::default().fg(theme::AKA),
            )),
            Line::from(Span::styled(
                format!("Checked at {} · press c to retry", checked_at.format("%H:%M:%S")),
                Style::default().fg(theme::DIM),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_palette(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Traditional Japanese Color Palette ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::DIM));

    let mut lines = Vec::new();
    for (name, hex, color) in theme::PALETTE {
        lines.push(Line::from(vec![
            Span::styled("██████ ", Style::default().fg(*color)),
            Span::raw(format!("{name}  ")),
            Span::styled(*hex, Style::default().fg(theme::DIM)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_navigation(frame: &mut Frame, area: Rect) {
    let nav = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("s", Style::default().fg(theme::ACTIVE)),
            Span::raw(" Sign In    "),
            Span::styled("r", Style::default().fg(theme::ACTIVE)),
            Span::raw(" Create Account"),
        ]),
        Line::from(Span::styled(
            "Welcome back to your Japanese learning journey",
            Style::default().fg(theme::DIM),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(nav, area);
}
