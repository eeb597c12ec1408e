//! Rendering tests for individual panes

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use commitscope::ui::views::{BreakdownView, StatsView, StoryView};
use commitscope::ui::widgets::{render_tooltip, tooltip_lines};

use crate::common::five_days;

fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_stats_panel_empty() {
    let stats = StatsView::new();
    let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
    terminal
        .draw(|frame| stats.render(frame, frame.area()))
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "┌ Summary ─────────────────────────────┐"
    "│Total LOC               0             │"
    "│Total commits           0             │"
    "│Files                   0             │"
    "│Longest file (lines)    —             │"
    "│Avg file length (lines) —             │"
    "│Maximum depth           —             │"
    "│Most active period      —             │"
    "└──────────────────────────────────────┘"
    "#);
}

#[test]
fn test_stats_panel_with_history() {
    let mut stats = StatsView::new();
    stats.refresh(&five_days().commits());

    let rows: Vec<String> = stats
        .stats()
        .rows()
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    assert_snapshot!(rows.join("\n"), @r"
    Total LOC: 23
    Total commits: 5
    Files: 5
    Longest file (lines): 8 (src/c4.js)
    Avg file length (lines): 4.6
    Maximum depth: 3
    Most active period: in the morning
    ");
}

#[test]
fn test_tooltip_content() {
    let commits = five_days().commits();
    let text: Vec<String> = tooltip_lines(&commits[1])
        .iter()
        .map(|line| line.to_string())
        .collect();

    assert_snapshot!(text.join("\n"), @r"
    Commit  c2
    https://github.com/me/repo/commit/c2
    Date    Friday, February 2, 2024
    Time    1:36 PM
    Author  jw
    Lines   6
    ");
}

#[test]
fn test_tooltip_stays_on_screen() {
    let commits = five_days().commits();
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    terminal
        .draw(|frame| render_tooltip(frame, &commits[0], (48, 11)))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let area = Rect::new(0, 0, 50, 12);
    // Outermost ring stays blank (one-cell margin)
    for x in 0..area.width {
        assert_eq!(buffer[(x, 0)].symbol(), " ");
        assert_eq!(buffer[(x, area.height - 1)].symbol(), " ");
    }
    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("Commit"));
}

#[test]
fn test_breakdown_lists_largest_file_first() {
    let commits = five_days().commits();
    let mut view = BreakdownView::new();
    view.rebind(commits.iter().flat_map(|c| c.lines()));

    let rendered = render_to_string(60, 12, |frame| view.render(frame, frame.area()));
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines[0].contains("Files (5)"));
    assert!(lines[1].contains("src/c4.js"));
    assert!(lines[1].contains("■■■■■■■■"));
    assert!(lines[2].contains("8 lines"));
}

#[test]
fn test_story_marks_trigger_line_and_active_step() {
    let commits = five_days().commits();
    let mut story = StoryView::new(0.5);
    story.set_commits(&commits);

    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    terminal
        .draw(|frame| story.render(frame, frame.area(), true))
        .unwrap();
    // Inner viewport is 10 rows; trigger row is the 6th
    let rendered = terminal.backend().to_string();
    let trigger_row = rendered.lines().nth(6).unwrap();
    assert!(trigger_row.contains('▸'));

    let event = story.scroll_to_step(0).unwrap();
    assert_eq!(event.index, 0);
    terminal
        .draw(|frame| story.render(frame, frame.area(), true))
        .unwrap();
    let rendered = terminal.backend().to_string();
    let trigger_row = rendered.lines().nth(6).unwrap();
    assert!(trigger_row.contains("On February 1, 2024"));
}

#[test]
fn test_empty_panes_show_placeholders() {
    let stats = StatsView::new();
    let breakdown = BreakdownView::new();
    let mut story = StoryView::default();

    let rendered = render_to_string(40, 8, |frame| breakdown.render(frame, frame.area()));
    assert!(rendered.contains("No lines in view"));

    let rendered = render_to_string(40, 8, |frame| story.render(frame, frame.area(), false));
    assert!(rendered.contains("No commits to tell"));

    let rendered = render_to_string(40, 9, |frame| stats.render(frame, frame.area()));
    assert!(rendered.contains("Total LOC"));
}
