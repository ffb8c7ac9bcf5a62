//! Layout components (content area, centered cards, status bar)

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::View;

use super::theme;

/// Content area above the one-line status bar
pub fn content_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// Center a fixed-size card in the given area, clamped to fit
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bottom line: transient status message, or key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let bar = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };

    let line = if let Some(ref message) = app.state.status_message {
        Line::from(Span::styled(
            format!(" ✅ {message}"),
            Style::default().fg(Color::Green),
        ))
    } else {
        let hints = match app.state.current_view {
            View::Splash => "",
            View::Landing => " s sign in · r register · c re-check backend · q quit",
            View::SignIn => {
                " Tab next · Enter submit · Ctrl+R reveal · Ctrl+T remember me · Esc back"
            }
            View::Register => " Tab next · Enter submit · Ctrl+R reveal · Esc back",
        };
        Line::from(Span::styled(hints, Style::default().fg(theme::DIM)))
    };

    frame.render_widget(Paragraph::new(line), bar);
}
