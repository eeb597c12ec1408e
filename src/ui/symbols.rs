//! UI symbols (markers, glyphs, etc.)
//!
//! ## Character Set Policy
//! - **Unicode adopted**: block and arrow glyphs render in every modern terminal
//!
//! ASCII alternatives (for reference):
//! - UNIT: '#'
//! - TRIGGER: '>'
//! - KNOB: 'O'

/// File breakdown glyphs
pub mod breakdown {
    /// One source line (■)
    pub const UNIT: char = '■';
}

/// Story pane glyphs
pub mod story {
    /// Trigger line marker (▸)
    pub const TRIGGER: char = '▸';
}

/// Time slider glyphs
pub mod slider {
    /// Elapsed part of the track (━)
    pub const FILLED: char = '━';
    /// Remaining part of the track (─)
    pub const EMPTY: char = '─';
    /// Current position (●)
    pub const KNOB: char = '●';
}
