use cineBook::app::settings::Settings;
use cineBook::app::{
    App, BookingContinuation, BookingHandoff, ContinuationOutcome, Mode, SeatId, StepKind,
};
use cineBook::input::{KeyCode, KeyEvent, KeyModifiers};
use cineBook::runner::handlers::handle_key;

#[derive(Default)]
struct Recorder {
    seen: Vec<BookingHandoff>,
}

impl BookingContinuation for Recorder {
    fn continue_booking(&mut self, handoff: &BookingHandoff) -> ContinuationOutcome {
        self.seen.push(handoff.clone());
        ContinuationOutcome::Accepted("ok".into())
    }
}

fn press(app: &mut App, rec: &mut Recorder, keys: &[KeyCode]) -> bool {
    let mut quit = false;
    for k in keys {
        quit = handle_key(app, KeyEvent::new(*k, KeyModifiers::NONE), rec).unwrap();
    }
    quit
}

fn all_available() -> App {
    App::new(Settings {
        sold_probability: 0.0,
        ..Settings::default()
    })
}

#[test]
fn search_then_book_two_seats() {
    let mut app = all_available();
    let mut rec = Recorder::default();
    press(&mut app, &mut rec, &[KeyCode::Char('/')]);
    assert_eq!(app.mode, Mode::Search);
    // `q` is text while searching, not quit
    let quit = press(
        &mut app,
        &mut rec,
        &[KeyCode::Char('d'), KeyCode::Char('e'), KeyCode::Char('q'), KeyCode::Backspace],
    );
    assert!(!quit);
    assert_eq!(app.search, "de");
    press(&mut app, &mut rec, &[KeyCode::Enter]);
    assert_eq!(app.mode, Mode::Normal);

    press(
        &mut app,
        &mut rec,
        &[KeyCode::Enter, KeyCode::Enter, KeyCode::Down, KeyCode::Enter],
    );
    assert_eq!(app.wizard.theater().map(|t| t.name.as_str()), Some("Starlight Cinema"));
    assert_eq!(app.wizard.showtime(), Some("3:15 PM"));

    press(
        &mut app,
        &mut rec,
        &[KeyCode::Char(' '), KeyCode::Right, KeyCode::Down, KeyCode::Char(' '), KeyCode::Char('p')],
    );
    assert_eq!(rec.seen.len(), 1);
    assert_eq!(rec.seen[0].seats, vec![SeatId::new('A', 1), SeatId::new('B', 2)]);
    assert_eq!(rec.seen[0].showtime, "3:15 PM");
    assert!(matches!(app.mode, Mode::Message { .. }));

    press(&mut app, &mut rec, &[KeyCode::Esc]);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.wizard.kind(), StepKind::Seats);
}

#[test]
fn proceed_without_seats_does_nothing() {
    let mut app = all_available();
    let mut rec = Recorder::default();
    press(&mut app, &mut rec, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter, KeyCode::Char('p')]);
    assert!(rec.seen.is_empty());
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn escape_walks_back_to_theaters() {
    let mut app = all_available();
    let mut rec = Recorder::default();
    press(&mut app, &mut rec, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);
    assert_eq!(app.wizard.kind(), StepKind::Seats);
    press(&mut app, &mut rec, &[KeyCode::Esc]);
    assert_eq!(app.wizard.kind(), StepKind::Showtimes);
    press(&mut app, &mut rec, &[KeyCode::Backspace]);
    assert_eq!(app.wizard.kind(), StepKind::Movies);
    press(&mut app, &mut rec, &[KeyCode::Esc, KeyCode::Esc]);
    assert_eq!(app.wizard.kind(), StepKind::Theaters);
}

#[test]
fn search_key_only_opens_on_theater_step() {
    let mut app = all_available();
    let mut rec = Recorder::default();
    press(&mut app, &mut rec, &[KeyCode::Enter, KeyCode::Char('/')]);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn q_quits_in_normal_mode() {
    let mut app = all_available();
    let mut rec = Recorder::default();
    assert!(press(&mut app, &mut rec, &[KeyCode::Char('q')]));
}

#[test]
fn modifier_chords_are_not_typed_into_search() {
    let mut app = all_available();
    let mut rec = Recorder::default();
    press(&mut app, &mut rec, &[KeyCode::Char('/')]);
    for key in [
        KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT),
        KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
    ] {
        assert!(!handle_key(&mut app, key, &mut rec).unwrap());
    }
    assert_eq!(app.search, "G");
    assert_eq!(app.mode, Mode::Search);
}
