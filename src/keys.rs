//! Keybinding definitions for commitscope
//!
//! All keybindings are defined here so the input handlers and the help panel
//! stay in agreement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Global keys
// =============================================================================

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Toggle help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Cycle keyboard focus between slider and story
pub const FOCUS_NEXT: KeyCode = KeyCode::Tab;

/// Clear the brush selection (or close help)
pub const ESC: KeyCode = KeyCode::Esc;

/// Check if key is Ctrl+C (always quits)
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Slider keys
// =============================================================================

/// Step the cursor back
pub const SLIDER_BACK: KeyCode = KeyCode::Left;

/// Step the cursor forward
pub const SLIDER_FORWARD: KeyCode = KeyCode::Right;

/// Jump to the start of history
pub const SLIDER_START: KeyCode = KeyCode::Home;

/// Jump to the end of history
pub const SLIDER_END: KeyCode = KeyCode::End;

/// Multiplier applied to the slider step while Shift is held
pub const COARSE_STEP_FACTOR: f64 = 10.0;

// =============================================================================
// Story keys
// =============================================================================

/// Scroll story down (vim style)
pub const SCROLL_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll story down (arrow key)
pub const SCROLL_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Scroll story up (vim style)
pub const SCROLL_UP: KeyCode = KeyCode::Char('k');

/// Scroll story up (arrow key)
pub const SCROLL_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Scroll one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Jump to the next step
pub const NEXT_STEP: KeyCode = KeyCode::Char('n');

/// Jump to the previous step
pub const PREV_STEP: KeyCode = KeyCode::Char('p');

/// Check if key scrolls the story down (j or ↓)
pub fn is_scroll_down(code: KeyCode) -> bool {
    matches!(code, SCROLL_DOWN | SCROLL_DOWN_ARROW)
}

/// Check if key scrolls the story up (k or ↑)
pub fn is_scroll_up(code: KeyCode) -> bool {
    matches!(code, SCROLL_UP | SCROLL_UP_ARROW)
}

// =============================================================================
// File breakdown keys
// =============================================================================

/// Scroll the file list down
pub const FILES_DOWN: KeyCode = KeyCode::Char(']');

/// Scroll the file list up
pub const FILES_UP: KeyCode = KeyCode::Char('[');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Focus slider / story",
    },
    KeyBindEntry {
        key: "[ / ]",
        description: "Scroll file breakdown",
    },
];

/// Slider key bindings for help display
pub const SLIDER_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "←/→",
        description: "Move time cursor",
    },
    KeyBindEntry {
        key: "Shift+←/→",
        description: "Move time cursor (coarse)",
    },
    KeyBindEntry {
        key: "Home/End",
        description: "First / latest commit",
    },
    KeyBindEntry {
        key: "Mouse",
        description: "Click or drag the track",
    },
];

/// Story key bindings for help display
pub const STORY_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Scroll down/up",
    },
    KeyBindEntry {
        key: "PgDn/PgUp",
        description: "Scroll one page",
    },
    KeyBindEntry {
        key: "n/p",
        description: "Next / previous commit",
    },
    KeyBindEntry {
        key: "Wheel",
        description: "Scroll under the pointer",
    },
];

/// Chart key bindings for help display
pub const CHART_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Hover",
        description: "Show commit details",
    },
    KeyBindEntry {
        key: "Drag",
        description: "Brush-select commits",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Clear selection",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};

pub const HINT_FOCUS: KeyHint = KeyHint {
    key: "Tab",
    label: "Focus",
    color: Color::Magenta,
};

pub const HINT_SLIDE: KeyHint = KeyHint {
    key: "←/→",
    label: "Time",
    color: Color::Yellow,
};

pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Yellow,
};

/// Hints while the slider has focus
pub const SLIDER_HINTS: &[KeyHint] = &[HINT_SLIDE, HINT_FOCUS, HINT_HELP, HINT_QUIT];

/// Hints while the story has focus
pub const STORY_HINTS: &[KeyHint] = &[HINT_SCROLL, HINT_FOCUS, HINT_HELP, HINT_QUIT];
