//! Form components for the sign-in and registration screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::{Form, FormField, SubmitState};

use super::{layout, theme};

/// Draw a single-line form field with its inline error underneath
fn draw_field(
    frame: &mut Frame,
    field_area: Rect,
    error_area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(theme::AKA)
    } else if is_active {
        Style::default().fg(theme::ACTIVE)
    } else {
        Style::default().fg(theme::DIM)
    };

    let value_style = if is_active {
        Style::default().fg(theme::ACTIVE)
    } else {
        Style::default().fg(theme::DIM)
    };

    let cursor = if is_active { "▌" } else { "" };

    let title = if field.secret && field.revealed {
        format!(" {} (visible) ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value(), value_style),
        Span::styled(cursor, Style::default().fg(theme::ACTIVE)),
    ]))
    .block(block);
    frame.render_widget(content, field_area);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(theme::AKA),
            )),
            error_area,
        );
    }
}

/// Draw the submit control: disabled with busy text while Pending
fn draw_submit(frame: &mut Frame, area: Rect, state: &SubmitState, idle_label: &str, busy_label: &str) {
    let (label, style) = if state.is_pending() {
        (
            format!("⏳ {busy_label}"),
            Style::default().fg(theme::DIM),
        )
    } else {
        (
            format!("[ {idle_label} ]"),
            Style::default()
                .fg(theme::ACTIVE)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
        area,
    );
}

/// Draw the form-level failure banner, if the last episode failed
fn draw_failure(frame: &mut Frame, area: Rect, state: &SubmitState) {
    if let Some(reason) = state.failure() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("✗ {reason}"),
                Style::default().fg(theme::AKA),
            ))
            .alignment(Alignment::Center),
            area,
        );
    }
}

/// Draw the sign-in screen
pub fn draw_sign_in(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.sign_in;
    let card = layout::centered_card(area, 54, 19);

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACTIVE));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // email
            Constraint::Length(1), // email error
            Constraint::Length(3), // password
            Constraint::Length(1), // password error
            Constraint::Length(1), // remember me / forgot password stubs
            Constraint::Length(1), // spacer
            Constraint::Length(1), // submit
            Constraint::Length(1), // failure banner
            Constraint::Length(1), // flavor footer
        ])
        .margin(1)
        .split(card);

    frame.render_widget(
        Paragraph::new("Welcome back to your Japanese learning journey")
            .style(Style::default().fg(theme::DIM))
            .alignment(Alignment::Center),
        chunks[0],
    );

    draw_field(
        frame,
        chunks[1],
        chunks[2],
        &form.email,
        form.active_field() == 0,
        form.errors.get("email"),
    );
    draw_field(
        frame,
        chunks[3],
        chunks[4],
        &form.password,
        form.active_field() == 1,
        form.errors.get("password"),
    );

    // Stubs: rendered but wired to nothing until a session flow exists
    let remember = if form.remember_me { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{remember} Remember me"),
                Style::default().fg(theme::DIM),
            ),
            Span::raw("    "),
            Span::styled("Forgot password?", Style::default().fg(theme::AO)),
        ]))
        .alignment(Alignment::Center),
        chunks[5],
    );

    draw_submit(
        frame,
        chunks[7],
        form.submission.state(),
        "Sign In",
        "Signing in...",
    );
    draw_failure(frame, chunks[8], form.submission.state());

    frame.render_widget(
        Paragraph::new("頑張って！ (Ganbatte!) - Good luck with your studies!")
            .style(Style::default().fg(theme::DIM))
            .alignment(Alignment::Center),
        chunks[9],
    );
}

/// Draw the registration screen
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.register;
    let card = layout::centered_card(area, 54, 25);

    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACTIVE));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // username
            Constraint::Length(1), // username error
            Constraint::Length(3), // email
            Constraint::Length(1), // email error
            Constraint::Length(3), // password
            Constraint::Length(1), // password error
            Constraint::Length(3), // confirm password
            Constraint::Length(1), // confirm error
            Constraint::Length(1), // submit
            Constraint::Length(1), // failure banner
            Constraint::Length(1), // flavor footer
        ])
        .margin(1)
        .split(card);

    frame.render_widget(
        Paragraph::new("Start your Japanese learning journey")
            .style(Style::default().fg(theme::DIM))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let fields = [
        (&form.username, 1usize, 2usize, "username"),
        (&form.email, 3, 4, "email"),
        (&form.password, 5, 6, "password"),
        (&form.confirm_password, 7, 8, "confirm_password"),
    ];
    for (index, (field, field_chunk, error_chunk, name)) in fields.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[field_chunk],
            chunks[error_chunk],
            field,
            form.active_field() == index,
            form.errors.get(name),
        );
    }

    draw_submit(
        frame,
        chunks[9],
        form.submission.state(),
        "Create Account",
        "Creating Account...",
    );
    draw_failure(frame, chunks[10], form.submission.state());

    frame.render_widget(
        Paragraph::new("いらっしゃいませ！ (Irasshaimase!) - Welcome!")
            .style(Style::default().fg(theme::DIM))
            .alignment(Alignment::Center),
        chunks[11],
    );
}
