//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance, plus the
//! perceptual ramps used to color commits by time of day.

use ratatui::style::Color;

/// Colors for the slider row
pub mod slider {
    use super::*;

    /// Filled part of the track
    pub const FILLED: Color = Color::Cyan;
    /// Remaining part of the track
    pub const EMPTY: Color = Color::DarkGray;
    /// Knob color
    pub const KNOB: Color = Color::White;
    /// Cutoff time label color
    pub const TIME_LABEL: Color = Color::Yellow;
}

/// Colors for the scatterplot
pub mod scatter {
    use super::*;

    /// Horizontal gridline color
    pub const GRIDLINE: Color = Color::DarkGray;
    /// Axis label color
    pub const AXIS_LABEL: Color = Color::Gray;
    /// Points inside the brush
    pub const SELECTED: Color = Color::Rgb(0xff, 0x6b, 0x6b);
    /// Brush rectangle outline
    pub const BRUSH: Color = Color::LightBlue;
}

/// Colors for the stats panel
pub mod stats {
    use super::*;

    pub const LABEL: Color = Color::Gray;
    pub const VALUE: Color = Color::White;
}

/// Colors for the story pane
pub mod story {
    use super::*;

    /// Step currently crossing the trigger line
    pub const ACTIVE: Color = Color::White;
    /// Other steps
    pub const INACTIVE: Color = Color::DarkGray;
    /// Commit link
    pub const LINK: Color = Color::Cyan;
}

/// Categorical palette for line types (Tableau 10)
pub const CATEGORY_PALETTE: [Color; 10] = [
    Color::Rgb(0x4e, 0x79, 0xa7),
    Color::Rgb(0xf2, 0x8e, 0x2c),
    Color::Rgb(0xe1, 0x57, 0x59),
    Color::Rgb(0x76, 0xb7, 0xb2),
    Color::Rgb(0x59, 0xa1, 0x4f),
    Color::Rgb(0xed, 0xc9, 0x49),
    Color::Rgb(0xaf, 0x7a, 0xa1),
    Color::Rgb(0xff, 0x9d, 0xa7),
    Color::Rgb(0x9c, 0x75, 0x5f),
    Color::Rgb(0xba, 0xb0, 0xab),
];

/// Cubehelix color (hue in degrees, saturation, lightness)
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cubehelix {
    h: f64,
    s: f64,
    l: f64,
}

impl Cubehelix {
    const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Interpolate without taking the shortest hue path
    fn lerp_long(self, other: Self, t: f64) -> Self {
        Self {
            h: self.h + (other.h - self.h) * t,
            s: self.s + (other.s - self.s) * t,
            l: self.l + (other.l - self.l) * t,
        }
    }

    fn to_rgb(self) -> Color {
        const A: f64 = -0.14861;
        const B: f64 = 1.78277;
        const C: f64 = -0.29227;
        const D: f64 = -0.90649;
        const E: f64 = 1.97294;

        let h = (self.h + 120.0).to_radians();
        let a = self.s * self.l * (1.0 - self.l);
        let (sin_h, cos_h) = h.sin_cos();

        let channel = |v: f64| (255.0 * v).round().clamp(0.0, 255.0) as u8;
        Color::Rgb(
            channel(self.l + a * (A * cos_h + B * sin_h)),
            channel(self.l + a * (C * cos_h + D * sin_h)),
            channel(self.l + a * (E * cos_h)),
        )
    }
}

const WARM_START: Cubehelix = Cubehelix::new(-100.0, 0.75, 0.35);
const COOL_START: Cubehelix = Cubehelix::new(260.0, 0.75, 0.35);
const RAMP_END: Cubehelix = Cubehelix::new(80.0, 1.50, 0.8);

/// Warm ramp (magenta → orange → yellow-green), `t` in [0, 1]
pub fn warm(t: f64) -> Color {
    WARM_START.lerp_long(RAMP_END, t).to_rgb()
}

/// Cool ramp (blue → cyan → green), `t` in [0, 1]
pub fn cool(t: f64) -> Color {
    COOL_START.lerp_long(RAMP_END, t).to_rgb()
}

/// Whether an hour fraction counts as daytime (warm ramp)
pub fn is_daytime(hour_frac: f64) -> bool {
    (6.0..=20.0).contains(&hour_frac)
}

/// Day/night color for a commit's hour fraction.
///
/// Each point picks one ramp; ramps are never blended into each other.
pub fn hour_color(hour_frac: f64) -> Color {
    let t = hour_frac / 24.0;
    if is_daytime(hour_frac) {
        warm(t)
    } else {
        cool(t)
    }
}
