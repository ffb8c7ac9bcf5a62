//! Splash screen rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::SplashState;

use super::theme;

const LOGO: &[&str] = &[
    "",
    "🗾",
    "",
    "N  I  J  O  U  Z  U",
    "",
    "日本語を学ぼう — Learn Japanese",
];

pub fn draw(frame: &mut Frame, area: Rect, splash: &SplashState) {
    let logo_height = LOGO.len() as u16;
    let base_y = area.height.saturating_sub(logo_height) / 2;
    let offset = splash.scroll_offset.round() as u16;
    let y = base_y.saturating_sub(offset);

    // Once the logo has fully scrolled past the top, draw nothing
    if offset > base_y + logo_height {
        return;
    }

    let lines: Vec<Line> = LOGO
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == 3 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::DIM)
            };
            Line::from(Span::styled(*text, style))
        })
        .collect();

    let logo_area = Rect {
        x: area.x,
        y: area.y + y,
        width: area.width,
        height: logo_height.min(area.height.saturating_sub(y)),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        logo_area,
    );
}
