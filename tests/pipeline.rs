//! End-to-end scenarios for the time cursor and the views it drives

mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use commitscope::app::{App, Focus};
use commitscope::config::Config;
use commitscope::data::{DataLoadError, load_commits};
use commitscope::ui::views::Brush;

use common::{History, REPO, five_days};

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::from(code));
}

fn app_for(history: &History) -> App {
    App::new(history.commits(), Config::default())
}

#[test]
fn test_load_from_disk_groups_and_sorts() {
    let history = History::new()
        .commit("late", "2024-03-01T09:00:00Z", 2)
        .commit("early", "2024-01-01T09:00:00Z", 3)
        .lines("late", "2024-03-01T09:00:00Z", "style.css", "css", 1);
    let file = history.write();

    let commits = load_commits(file.path(), REPO).unwrap();
    let ids: Vec<&str> = commits.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["early", "late"]);
    assert_eq!(commits[1].total_lines(), 3);
    assert_eq!(commits[1].files_touched(), 2);
    assert_eq!(commits[1].url(), "https://github.com/me/repo/commit/late");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_commits(&dir.path().join("loc.csv"), REPO).unwrap_err();
    assert!(matches!(err, DataLoadError::Io { .. }));
}

#[test]
fn test_malformed_row_reports_row_number() {
    let csv = format!(
        "{}\nc1,a.js,1,js,0,10,jw,2024-02-01,10:00:00,Z,2024-02-01T10:00:00Z\nc1,a.js,two,js,0,10,jw,2024-02-01,10:00:00,Z,2024-02-01T10:00:00Z\n",
        common::HEADER
    );
    let err = commitscope::data::parse_records(csv.as_bytes()).unwrap_err();
    match err {
        DataLoadError::InvalidNumber { row, column, value } => {
            assert_eq!(row, 3);
            assert_eq!(column, "line");
            assert_eq!(value, "two");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_dataset_renders_zero_state() {
    let mut app = App::new(Vec::new(), Config::default());
    app.set_progress(30.0);

    let rows = app.stats.stats().rows();
    assert_eq!(rows[0], ("Total LOC", "0".to_string()));
    assert_eq!(rows[1], ("Total commits", "0".to_string()));
    assert_eq!(rows[3].1, "—");
    assert_eq!(rows[6].1, "—");
    assert!(app.scatter.points().is_empty());
    assert!(app.breakdown.is_empty());
    assert!(app.story.steps().is_empty());
}

#[test]
fn test_single_commit_dataset() {
    let mut app = app_for(&History::new().commit("only", "2024-02-05T13:36:00Z", 4));
    assert!(app.cursor().scale().is_degenerate());
    assert!(!app.cursor().progress().is_nan());
    assert_eq!(app.scatter.points().len(), 1);

    app.set_progress(0.0);
    assert_eq!(app.filtered_commits().len(), 1);
    assert_eq!(app.scatter.points().len(), 1);
}

#[test]
fn test_brush_selects_exactly_two_commits_and_cursor_clears_it() {
    let history = History::new()
        .commit("a", "2024-02-01T02:00:00Z", 5)
        .commit("b", "2024-02-02T14:30:00Z", 50)
        .commit("c", "2024-02-03T23:00:00Z", 5);
    let mut app = app_for(&history);

    let point = |app: &App, i: usize| {
        let p = app.scatter.points().iter().find(|p| p.commit == i).unwrap();
        (p.x, p.y)
    };
    let brush = Brush::from_corners(point(&app, 0), point(&app, 1));
    app.set_brush(Some(brush));

    assert_eq!(app.scatter.selected(), vec![0, 1]);
    assert_eq!(app.selection().commits, 2);
    assert_eq!(
        app.selection().count_label().as_deref(),
        Some("2 commits selected")
    );
    assert_eq!(app.selection().languages.len(), 1);
    assert_eq!(app.selection().languages[0].lines, 55);

    app.set_progress(90.0);
    assert!(app.scatter.brush().is_none());
    assert!(app.selection().is_empty());
}

#[test]
fn test_escape_clears_brush() {
    let mut app = app_for(&five_days());
    app.set_brush(Some(Brush::from_corners((0.0, 0.0), (1000.0, 600.0))));
    assert_eq!(app.selection().commits, 5);

    press(&mut app, KeyCode::Esc);
    assert!(app.selection().is_empty());
}

#[test]
fn test_story_step_for_second_of_five_commits() {
    let mut app = app_for(&five_days());
    app.on_resize(120, 40);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Story);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.story.active(), Some(0));
    assert_eq!(app.filtered_commits().len(), 1);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.story.active(), Some(1));
    let visible = app.filtered_commits().len();
    assert!(visible >= 2);
    assert!(visible < 5);
    assert!(app.cursor().cutoff() >= app.commits()[1].instant());
}

#[test]
fn test_scrolling_story_walks_every_commit() {
    let mut app = app_for(&five_days());
    app.on_resize(100, 30);
    press(&mut app, KeyCode::Tab);

    let mut seen = Vec::new();
    for _ in 0..200 {
        press(&mut app, KeyCode::Char('j'));
        if seen.last() != app.story.active().as_ref() {
            seen.extend(app.story.active());
        }
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    assert_eq!(app.filtered_commits().len(), 5);
}

#[test]
fn test_slider_keys() {
    let mut app = app_for(&five_days());
    assert_eq!(app.focus, Focus::Slider);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor().progress(), 99.0);

    app.on_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
    assert_eq!(app.cursor().progress(), 89.0);

    press(&mut app, KeyCode::Home);
    assert_eq!(app.cursor().progress(), 0.0);
    assert_eq!(app.filtered_commits().len(), 1);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.cursor().progress(), 1.0);

    press(&mut app, KeyCode::End);
    assert_eq!(app.filtered_commits().len(), 5);
}

#[test]
fn test_slider_step_from_config() {
    let config = Config::from_toml_str("[slider]\nstep = 25.0").unwrap();
    let mut app = App::new(five_days().commits(), config);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor().progress(), 75.0);
}

#[test]
fn test_help_and_quit() {
    let mut app = app_for(&five_days());
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    // Keys other than close are swallowed while help is open
    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor().progress(), 100.0);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_ctrl_c_quits_from_help() {
    let mut app = app_for(&five_days());
    press(&mut app, KeyCode::Char('?'));
    app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}
