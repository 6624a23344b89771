use ratatui::{layout::Rect, text::{Line, Span}, widgets::{Block, Borders, Paragraph}, Frame};

use crate::app::{App, Mode, Wizard};
use crate::ui::colors::current as current_colors;

pub const SEARCH_PLACEHOLDER: &str = "Search theaters or locations";

pub fn render_title(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let p = Paragraph::new(Span::styled(" Book Your Movie", colors.title_style)).style(colors.panel_block_style);
    f.render_widget(p, area);
}

/// Search box. Shows the placeholder while empty and a caret while focused.
pub fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let focused = app.mode == Mode::Search;
    let text = if app.search.is_empty() && !focused {
        Span::styled(SEARCH_PLACEHOLDER, colors.muted_style)
    } else if focused {
        Span::styled(format!("{}▏", app.search), colors.search_focused_style)
    } else {
        Span::styled(app.search.clone(), colors.search_style)
    };
    let style = if focused { colors.search_focused_style } else { colors.search_style };
    let p = Paragraph::new(Line::from(text))
        .block(Block::default().borders(Borders::ALL).title(" / search ").style(style));
    f.render_widget(p, area);
}

/// Breadcrumb of the selections made so far.
pub fn breadcrumb(wizard: &Wizard) -> String {
    let mut parts = vec!["Theaters".to_string()];
    if let Some(t) = wizard.theater() {
        parts.push(t.name.clone());
    }
    if let Some(m) = wizard.movie() {
        parts.push(m.title.clone());
    }
    if let Some(s) = wizard.showtime() {
        parts.push(s.to_string());
    }
    parts.join(" › ")
}

pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let status = format!(
        " {}  |  Step: {}  |  Seat map: {}",
        breadcrumb(&app.wizard),
        app.wizard.kind(),
        app.settings.seat_map
    );
    f.render_widget(Paragraph::new(status).style(colors.status_style), area);
}
