//! List views for the theater, movie and showtime steps.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{Movie, Theater};
use crate::ui::colors::current as current_colors;

/// One-line summary of a theater card.
pub fn format_theater_line(t: &Theater) -> String {
    format!("{}  ·  {}  ·  {}", t.name, t.location, t.distance)
}

fn render_list(f: &mut Frame, area: Rect, title: String, items: Vec<ListItem<'_>>, selected: usize) {
    let colors = current_colors();
    let len = items.len();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title).style(colors.panel_block_style))
        .highlight_style(colors.panel_selected_style)
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(if selected < len { Some(selected) } else { None });
    f.render_stateful_widget(list, area, &mut state);
}

pub fn render_theaters(f: &mut Frame, area: Rect, theaters: &[&Theater], selected: usize, query: &str) {
    let colors = current_colors();
    if theaters.is_empty() {
        let p = Paragraph::new(format!("No theaters match \"{}\"", query))
            .style(colors.muted_style)
            .block(Block::default().borders(Borders::ALL).title(" Select a Theater ").style(colors.panel_block_style));
        f.render_widget(p, area);
        return;
    }
    let items = theaters
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(format_theater_line(t)),
                Span::raw("  "),
                Span::styled(t.movies_badge(), colors.badge_style),
            ]))
        })
        .collect();
    render_list(f, area, " Select a Theater ".to_string(), items, selected);
}

pub fn render_movies(f: &mut Frame, area: Rect, theater: &Theater, selected: usize) {
    let colors = current_colors();
    let items = theater
        .movies
        .iter()
        .map(|m: &Movie| {
            ListItem::new(Text::from(vec![
                Line::from(format!("★ {}", m.title)),
                Line::from(Span::styled(format!("   poster: {}", m.poster), colors.muted_style)),
            ]))
        })
        .collect();
    render_list(f, area, format!(" Select a Movie at {} ", theater.name), items, selected);
}

pub fn render_showtimes(f: &mut Frame, area: Rect, movie: &Movie, selected: usize) {
    let colors = current_colors();
    let items = movie
        .showtimes
        .iter()
        .map(|time| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<10}", time)),
                Span::styled(" Select Seats ", colors.badge_style),
            ]))
        })
        .collect();
    render_list(f, area, format!(" Select Showtime for {} ", movie.title), items, selected);
}
