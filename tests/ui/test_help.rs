//! Tests for the help overlay and status bar

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use commitscope::keys;
use commitscope::ui::widgets::{build_help_lines, build_status_bar, render_help_panel};

#[test]
fn test_help_lines() {
    let text: Vec<String> = build_help_lines()
        .iter()
        .map(|line| line.to_string().trim_end().to_string())
        .collect();

    assert_snapshot!(text.join("\n"), @r"
    Key bindings:

    Global:
      q           Quit
      ?           Toggle help
      Tab         Focus slider / story
      [ / ]       Scroll file breakdown

    Time Slider:
      ←/→         Move time cursor
      Shift+←/→   Move time cursor (coarse)
      Home/End    First / latest commit
      Mouse       Click or drag the track

    Story:
      j/k         Scroll down/up
      PgDn/PgUp   Scroll one page
      n/p         Next / previous commit
      Wheel       Scroll under the pointer

    Chart:
      Hover       Show commit details
      Drag        Brush-select commits
      Esc         Clear selection
    ");
}

#[test]
fn test_status_bar_hints() {
    let line = build_status_bar(keys::SLIDER_HINTS);
    assert_eq!(
        line.to_string(),
        " [←/→] Time   [Tab] Focus   [?] Help   [q] Quit "
    );
}

#[test]
fn test_help_panel_fits_small_terminal() {
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area()))
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("commitscope - Help"));
    assert!(rendered.contains("Key bindings:"));
}
