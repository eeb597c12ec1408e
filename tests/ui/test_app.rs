//! Full-screen rendering and mouse interaction through the app

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use commitscope::app::App;
use commitscope::config::Config;
use commitscope::ui::views::{CHART_HEIGHT, CHART_WIDTH};

use crate::common::five_days;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn setup() -> (App, Terminal<TestBackend>) {
    let app = App::new(five_days().commits(), Config::default());
    let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    (app, terminal)
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> String {
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_full_layout() {
    let (mut app, mut terminal) = setup();
    let rendered = draw(&mut app, &mut terminal);

    assert!(rendered.contains("Time 100%"));
    assert!(rendered.contains("February 5, 2024 at 4:45 PM"));
    assert!(rendered.contains("Commits by time of day"));
    assert!(rendered.contains("Summary"));
    assert!(rendered.contains("Story"));
    assert!(rendered.contains("Files (5)"));
    assert!(rendered.contains("Drag on the chart to select commits"));
    assert!(rendered.contains("Slider | 5/5 commits"));
}

#[test]
fn test_empty_dataset_renders() {
    let mut app = App::new(Vec::new(), Config::default());
    app.error_message = Some("Failed to read \"loc.csv\"".to_string());
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let rendered = draw(&mut app, &mut terminal);

    assert!(rendered.contains("No commits in view"));
    assert!(rendered.contains("No commits to tell"));
    assert!(rendered.contains("Error:"));
    assert!(rendered.contains("Slider | 0/0 commits"));
}

#[test]
fn test_slider_click_and_drag() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);

    // Track starts just inside the slider border
    app.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
    assert_eq!(app.cursor().progress(), 0.0);
    assert_eq!(app.filtered_commits().len(), 1);

    app.on_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 119, 1));
    assert_eq!(app.cursor().progress(), 100.0);
    assert_eq!(app.filtered_commits().len(), 5);

    app.on_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 119, 1));
    app.on_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1));
    assert_eq!(app.cursor().progress(), 100.0);

    let rendered = draw(&mut app, &mut terminal);
    assert!(rendered.contains("Time 100%"));
}

#[test]
fn test_hover_shows_tooltip() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);

    let area = app.scatter.canvas_area();
    let point = app.scatter.points().last().unwrap().clone();
    let column = area.x + (point.x / CHART_WIDTH * area.width as f64) as u16;
    let row = area.y + (point.y / CHART_HEIGHT * area.height as f64) as u16;

    app.on_mouse_event(mouse(MouseEventKind::Moved, column, row));
    assert_eq!(app.scatter.hovered(), Some(point.commit));

    let commit_id = app.filtered_commits()[point.commit].id().to_string();
    let rendered = draw(&mut app, &mut terminal);
    assert!(rendered.contains(&format!("commit/{commit_id}")));
    assert!(rendered.contains("Author"));

    app.on_mouse_event(mouse(MouseEventKind::Moved, 0, 0));
    assert_eq!(app.scatter.hovered(), None);
}

#[test]
fn test_brush_drag_over_whole_chart() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);
    let area = app.scatter.canvas_area();

    app.on_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), area.x, area.y));
    app.on_mouse_event(mouse(
        MouseEventKind::Drag(MouseButton::Left),
        area.right() + 5,
        area.bottom() + 5,
    ));
    app.on_mouse_event(mouse(
        MouseEventKind::Up(MouseButton::Left),
        area.right() - 1,
        area.bottom() - 1,
    ));

    assert_eq!(app.selection().commits, 5);
    let rendered = draw(&mut app, &mut terminal);
    assert!(rendered.contains("5 commits selected"));
    assert!(rendered.contains("23 lines (100%)"));
}

#[test]
fn test_wheel_over_story_moves_cursor() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);

    // Story pane sits in the right column, below the slider row
    app.on_mouse_event(mouse(MouseEventKind::ScrollDown, 100, 10));
    assert_eq!(app.story.active(), Some(0));
    assert_eq!(app.filtered_commits().len(), 1);
}

#[test]
fn test_resize_recomputes_story_geometry() {
    let (mut app, mut terminal) = setup();
    draw(&mut app, &mut terminal);
    let wide_last = app.story.boxes().last().unwrap().top;

    app.on_resize(70, 40);
    let narrow_last = app.story.boxes().last().unwrap().top;
    assert!(narrow_last > wide_last);
}
