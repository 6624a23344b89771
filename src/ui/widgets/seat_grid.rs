//! Seat map view: screen indicator, the 7×10 grid, legend and the proceed
//! button.

use std::collections::BTreeSet;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{Seat, SeatId, SeatMap};
use crate::ui::colors::{current as current_colors, Colors};

/// Cell text for a seat; selected seats carry a check mark.
pub fn seat_label(seat: &Seat, selected: bool) -> String {
    if selected {
        format!("{:<4}", format!("{}✓", seat.id))
    } else {
        format!("{:<4}", seat.id.to_string())
    }
}

/// Label of the proceed button, shown only once a seat is picked.
pub fn proceed_label(count: usize) -> Option<String> {
    (count > 0).then(|| format!("Proceed to Food & Beverages ({} seats)", count))
}

fn seat_style(colors: &Colors, seat: &Seat, selected: bool, under_cursor: bool) -> Style {
    let style = if seat.is_sold() {
        colors.seat_sold_style
    } else if selected {
        colors.seat_selected_style
    } else {
        colors.seat_available_style
    };
    if under_cursor {
        style.add_modifier(colors.seat_cursor_modifier)
    } else {
        style
    }
}

/// Build the grid lines, one per row.
pub fn grid_lines(map: &SeatMap, selected: &BTreeSet<SeatId>, cursor: (usize, usize)) -> Vec<Line<'static>> {
    let colors = current_colors();
    map.rows()
        .enumerate()
        .map(|(r, row)| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (c, seat) in row.iter().enumerate() {
                let is_sel = selected.contains(&seat.id);
                spans.push(Span::styled(
                    seat_label(seat, is_sel),
                    seat_style(&colors, seat, is_sel, (r, c) == cursor),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect()
}

fn legend(colors: &Colors) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", colors.seat_available_style),
        Span::raw(" Available   "),
        Span::styled("    ", colors.seat_selected_style),
        Span::raw(" Selected   "),
        Span::styled("    ", colors.seat_sold_style),
        Span::raw(" Sold"),
    ])
}

pub fn render(f: &mut Frame, area: Rect, map: &SeatMap, selected: &BTreeSet<SeatId>, cursor: (usize, usize)) {
    let colors = current_colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select Your Seats ")
        .style(colors.panel_block_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // screen (1), gap (1), grid (rows), gap (1), legend (1), gap (1), proceed (1)
    let rows = map.rows().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let grid_width = 5 * 10;
    let screen = Paragraph::new(Span::styled(format!("{:^width$}", "SCREEN", width = grid_width), colors.screen_style))
        .alignment(Alignment::Center);
    f.render_widget(screen, chunks[0]);

    let grid = Paragraph::new(grid_lines(map, selected, cursor)).alignment(Alignment::Center);
    f.render_widget(grid, chunks[2]);

    f.render_widget(Paragraph::new(legend(&colors)).alignment(Alignment::Center), chunks[4]);

    if let Some(label) = proceed_label(selected.len()) {
        let p = Paragraph::new(Span::styled(format!(" {} [p] ", label), colors.proceed_style))
            .alignment(Alignment::Center);
        f.render_widget(p, chunks[6]);
    }
}
