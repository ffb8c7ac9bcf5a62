//! UI module for rendering the TUI

mod forms;
mod landing;
mod layout;
mod splash;
mod theme;

use ratatui::Frame;

use crate::app::App;
use crate::state::View;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(ref splash) = app.splash_state {
        splash::draw(frame, area, splash);
        return;
    }

    let content = layout::content_area(area);
    match app.state.current_view {
        // Splash is drawn above while its animation state is alive
        View::Splash => {}
        View::Landing => landing::draw(frame, content, app),
        View::SignIn => forms::draw_sign_in(frame, content, app),
        View::Register => forms::draw_register(frame, content, app),
    }

    layout::draw_status_bar(frame, area, app);
}
