use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::colors::current as current_colors;

/// Rectangle of `w`×`h` centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

pub const DIALOG_WIDTH: u16 = 64;

/// Wrap `content` to `width` columns. Each source line wraps on its own;
/// empty lines are kept.
pub fn wrap_content(content: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    content
        .lines()
        .flat_map(|line| {
            let wrapped = textwrap::wrap(line, width);
            if wrapped.is_empty() {
                vec![String::new()]
            } else {
                wrapped.into_iter().map(|c| c.into_owned()).collect()
            }
        })
        .collect()
}

/// Modal message box with a single OK button. The box grows to fit the
/// wrapped text: borders (2) + text + blank line + button.
pub fn draw_message(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let colors = current_colors();
    let width = DIALOG_WIDTH.min(area.width);
    let body = wrap_content(content, width.saturating_sub(2) as usize);
    let height = u16::try_from(body.len()).unwrap_or(u16::MAX).saturating_add(4);
    let rect = centered_rect(area, width, height);
    f.render_widget(Clear, rect);
    let mut text: Vec<Line> = body.into_iter().map(Line::from).collect();
    text.push(Line::from(""));
    text.push(Line::from("[ OK ]").alignment(Alignment::Center));
    let p = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .style(colors.dialog_style),
    );
    f.render_widget(p, rect);
}
