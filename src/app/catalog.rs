//! Static theater catalog and the search filter used by the theater browser.

use once_cell::sync::Lazy;

use super::types::{Movie, Theater};

const PLACEHOLDER_POSTER: &str = "/api/placeholder/200/300";

static THEATERS: Lazy<Vec<Theater>> = Lazy::new(|| {
    vec![
        Theater {
            id: 1,
            name: "Cineplex Royal".into(),
            location: "Mumbai, Maharashtra".into(),
            distance: "2.3 km".into(),
            movies: vec![
                movie(101, "Epic Adventure", &["10:00 AM", "1:30 PM", "4:45 PM", "8:00 PM"]),
                movie(102, "Sci-Fi Odyssey", &["11:15 AM", "2:45 PM", "6:00 PM", "9:30 PM"]),
            ],
        },
        Theater {
            id: 2,
            name: "Starlight Cinema".into(),
            location: "Delhi, National Capital Territory".into(),
            distance: "4.7 km".into(),
            movies: vec![movie(
                103,
                "Romantic Comedy",
                &["12:00 PM", "3:15 PM", "5:45 PM", "8:30 PM"],
            )],
        },
    ]
});

fn movie(id: u32, title: &str, showtimes: &[&str]) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster: PLACEHOLDER_POSTER.to_string(),
        showtimes: showtimes.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in two-theater catalog. Lives for the whole process.
pub fn theaters() -> &'static [Theater] {
    &THEATERS
}

/// Return the theaters whose name or location contains `query`, ignoring
/// case. An empty query keeps every theater. Original order is preserved.
pub fn filter_theaters<'a>(theaters: &'a [Theater], query: &str) -> Vec<&'a Theater> {
    let needle = query.to_lowercase();
    theaters
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle) || t.location.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ts: &[&Theater]) -> Vec<String> {
        ts.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn empty_query_keeps_catalog_order() {
        let got = filter_theaters(theaters(), "");
        assert_eq!(names(&got), vec!["Cineplex Royal", "Starlight Cinema"]);
    }

    #[test]
    fn star_matches_only_starlight() {
        let got = filter_theaters(theaters(), "Star");
        assert_eq!(names(&got), vec!["Starlight Cinema"]);
    }

    #[test]
    fn location_matches_case_insensitively() {
        let got = filter_theaters(theaters(), "mUMBAI");
        assert_eq!(names(&got), vec!["Cineplex Royal"]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(filter_theaters(theaters(), "Kolkata").is_empty());
    }

    #[test]
    fn every_movie_uses_placeholder_poster() {
        for t in theaters() {
            for m in &t.movies {
                assert_eq!(m.poster, PLACEHOLDER_POSTER);
                assert_eq!(m.showtimes.len(), 4);
            }
        }
    }
}
