//! Named color themes for the switch.
//!
//! The seven themes are static configuration: each resolves to a fixed set
//! of track and thumb colors. Parsing rejects unknown names with a typed
//! error; the element layer decides what to do with that (it ignores it).

use conmutar_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven named color themes a switch can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchColor {
    /// Blue theme (default)
    #[default]
    Blue,
    /// Green theme
    Green,
    /// Red theme
    Red,
    /// Orange theme
    Orange,
    /// Yellow theme
    Yellow,
    /// Purple theme
    Purple,
    /// Gray theme
    Gray,
}

impl SwitchColor {
    /// All themes, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Purple,
        Self::Gray,
    ];

    /// The attribute value for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }

    /// Resolve the theme to its concrete colors.
    #[must_use]
    pub fn colors(self) -> PaletteColors {
        let track_on = match self {
            Self::Blue => Color::rgb(0.196, 0.451, 0.863), // #3273dc
            Self::Green => Color::rgb(0.282, 0.780, 0.557), // #48c78e
            Self::Red => Color::rgb(0.945, 0.275, 0.408),  // #f14668
            Self::Orange => Color::rgb(1.0, 0.592, 0.212), // #ff9736
            Self::Yellow => Color::rgb(1.0, 0.847, 0.239), // #ffd83d
            Self::Purple => Color::rgb(0.604, 0.361, 0.816), // #9a5cd0
            Self::Gray => Color::rgb(0.478, 0.478, 0.478), // #7a7a7a
        };

        PaletteColors {
            track_on,
            track_off: Color::rgb(0.710, 0.710, 0.710), // #b5b5b5
            thumb: Color::WHITE,
        }
    }
}

impl fmt::Display for SwitchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchColor {
    type Err = PaletteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| s.eq_ignore_ascii_case(c.as_str()))
            .ok_or_else(|| PaletteParseError {
                name: s.to_string(),
            })
    }
}

/// Error returned when a switch color name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteParseError {
    /// The rejected name
    pub name: String,
}

impl fmt::Display for PaletteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown switch color '{}' (expected one of: blue, green, red, orange, yellow, purple, gray)",
            self.name
        )
    }
}

impl std::error::Error for PaletteParseError {}

/// Concrete colors a theme resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteColors {
    /// Track color when the switch is on
    pub track_on: Color,
    /// Track color when the switch is off
    pub track_off: Color,
    /// Thumb color
    pub thumb: Color,
}

impl PaletteColors {
    /// Track color for the given state.
    #[must_use]
    pub const fn track(&self, on: bool) -> Color {
        if on {
            self.track_on
        } else {
            self.track_off
        }
    }

    /// Text color readable on the given track state.
    ///
    /// White where it clears the WCAG AA large-text ratio (3:1), black
    /// otherwise.
    #[must_use]
    pub fn state_text(&self, on: bool) -> Color {
        let track = self.track(on);
        if track.contrast_ratio(&Color::WHITE) >= 3.0 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }
}
