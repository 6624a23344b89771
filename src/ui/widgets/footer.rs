use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::{App, Mode, StepKind};
use crate::ui::colors::current as current_colors;

/// Key help for the current step.
pub fn help_text(app: &App) -> &'static str {
    match (&app.mode, app.wizard.kind()) {
        (Mode::Search, _) => "type to filter  Backspace:delete  Enter/Esc:done",
        (Mode::Message { .. }, _) => "Enter/Esc:close",
        (Mode::Normal, StepKind::Theaters) => "↑/↓:navigate  Enter:select  /:search  t:theme  q:quit",
        (Mode::Normal, StepKind::Movies) | (Mode::Normal, StepKind::Showtimes) => {
            "↑/↓:navigate  Enter:select  Backspace/Esc:back  t:theme  q:quit"
        }
        (Mode::Normal, StepKind::Seats) => {
            "←/→/↑/↓:move  Space/Enter:toggle seat  p:proceed  Backspace/Esc:back  q:quit"
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let p = Paragraph::new(help_text(app)).style(colors.footer_style);
    f.render_widget(p, area);
}
