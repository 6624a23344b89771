use ratatui::style::{Color, Style};
use serde::Deserialize;

use tracing::warn;

use crate::app::settings::Settings;
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub sold: Color,
    pub selected: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    muted: Option<String>,
    sold: Option<String>,
    selected: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Rgb(220, 38, 38),
            muted: Color::Gray,
            sold: Color::Red,
            selected: Color::Green,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Rgb(185, 28, 28),
            muted: Color::DarkGray,
            sold: Color::LightRed,
            selected: Color::Rgb(22, 163, 74),
        }
    }

    /// Built-in theme by name; unknown names fall back to dark.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Parse a palette file. Files without a `[palette]` table yield the
    /// dark theme; optional keys missing from the table keep dark defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        let base = Self::dark();
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            let or = |c: Option<String>, d: Color| c.map(|s| parse_hex(&s)).unwrap_or(d);
            return Ok(Self {
                bg: parse_hex(&p.bg),
                fg: parse_hex(&p.fg),
                accent: parse_hex(&p.accent),
                muted: or(p.muted, base.muted),
                sold: or(p.sold, base.sold),
                selected: or(p.selected, base.selected),
            });
        }
        Ok(base)
    }
}

/// Resolve the theme selected by `settings`: the palette file when one is
/// configured, otherwise the named built-in theme.
pub fn load_theme(settings: &Settings) -> Result<Theme, AppError> {
    match &settings.theme_file {
        Some(path) => {
            let loaded = std::fs::read_to_string(path)
                .map_err(AppError::from)
                .and_then(|text| {
                    Theme::from_toml(&text).map_err(|source| AppError::ThemeParse {
                        path: path.clone(),
                        source,
                    })
                });
            if let Err(e) = &loaded {
                warn!(error = %e, path = %path.display(), "failed to load theme");
            }
            loaded
        }
        None => Ok(Theme::named(&settings.theme)),
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_overrides_and_defaults() {
        let t = Theme::from_toml(
            "[palette]\nbg = \"#101010\"\nfg = \"#eeeeee\"\naccent = \"#ff0000\"\nsold = \"#800000\"\n",
        )
        .unwrap();
        assert_eq!(t.bg, Color::Rgb(16, 16, 16));
        assert_eq!(t.accent, Color::Rgb(255, 0, 0));
        assert_eq!(t.sold, Color::Rgb(128, 0, 0));
        assert_eq!(t.selected, Theme::dark().selected);
    }

    #[test]
    fn bad_hex_becomes_reset() {
        assert_eq!(parse_hex("#zzzzzz"), Color::Reset);
        assert_eq!(parse_hex("123"), Color::Reset);
    }

    #[test]
    fn load_theme_prefers_palette_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pal.toml");
        std::fs::write(&path, "[palette]\nbg = \"#000001\"\nfg = \"#ffffff\"\naccent = \"#00ff00\"\n").unwrap();
        let settings = Settings {
            theme: "light".into(),
            theme_file: Some(path),
            ..Settings::default()
        };
        assert_eq!(load_theme(&settings).unwrap().bg, Color::Rgb(0, 0, 1));

        let named = Settings {
            theme: "light".into(),
            ..Settings::default()
        };
        assert_eq!(load_theme(&named).unwrap(), Theme::light());
    }

    #[test]
    fn load_theme_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[palette\n").unwrap();
        let settings = Settings {
            theme_file: Some(path),
            ..Settings::default()
        };
        assert!(matches!(load_theme(&settings), Err(AppError::ThemeParse { .. })));
    }

    #[test]
    fn no_palette_table_is_dark() {
        assert_eq!(Theme::from_toml("name = \"x\"").unwrap(), Theme::dark());
        assert!(Theme::from_toml("[palette]\nbg = 3").is_err());
    }
}
