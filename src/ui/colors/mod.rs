use ratatui::style::{Modifier, Style};
use crate::ui::Theme;
use once_cell::sync::Lazy;
use std::sync::Mutex;

#[derive(Clone, Debug)]
pub struct Colors {
	pub title_style: Style,
	pub search_style: Style,
	pub search_focused_style: Style,
	pub status_style: Style,
	pub panel_block_style: Style,
	pub panel_selected_style: Style,
	pub muted_style: Style,
	pub badge_style: Style,
	pub screen_style: Style,
	pub seat_available_style: Style,
	pub seat_selected_style: Style,
	pub seat_sold_style: Style,
	pub seat_cursor_modifier: Modifier,
	pub proceed_style: Style,
	pub footer_style: Style,
	pub dialog_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

pub fn set_theme(name: &str) {
	match name {
		"dark" => set_from_theme(&Theme::dark()),
		"light" => set_from_theme(&Theme::light()),
		_ => {}
	}
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	let mut g = CURRENT.lock().unwrap_or_else(|e| e.into_inner());
	*g = derive(theme);
}

fn derive(theme: &Theme) -> Colors {
	let base = theme.style_fg();
	Colors {
		title_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		search_style: base.fg(theme.muted),
		search_focused_style: base.fg(theme.fg).add_modifier(Modifier::BOLD),
		status_style: base.fg(theme.muted),
		panel_block_style: base,
		panel_selected_style: Style::default().fg(theme.bg).bg(theme.accent),
		muted_style: base.fg(theme.muted),
		badge_style: base.fg(theme.selected),
		screen_style: Style::default().fg(theme.bg).bg(theme.muted),
		seat_available_style: base.fg(theme.fg),
		seat_selected_style: Style::default().fg(theme.bg).bg(theme.selected),
		seat_sold_style: Style::default().fg(theme.bg).bg(theme.sold),
		seat_cursor_modifier: Modifier::REVERSED | Modifier::BOLD,
		proceed_style: Style::default().fg(theme.fg).bg(theme.accent).add_modifier(Modifier::BOLD),
		footer_style: base.fg(theme.muted),
		dialog_style: base,
	}
}

pub fn current() -> Colors { CURRENT.lock().unwrap_or_else(|e| e.into_inner()).clone() }

pub fn toggle() {
	let cur = current();
	if cur.panel_block_style.bg == Some(Theme::light().bg) {
		set_from_theme(&Theme::dark())
	} else {
		set_from_theme(&Theme::light())
	}
}
