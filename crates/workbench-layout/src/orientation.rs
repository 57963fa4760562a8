#![forbid(unsafe_code)]

//! Tab strip placement and the axis it implies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which edge of the container the tab strip is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// The axis tabs are laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right; the strip thickness is a height.
    Horizontal,
    /// Top to bottom; the strip thickness is a width.
    Vertical,
}

impl Orientation {
    /// All placements, in declaration order.
    pub const ALL: [Orientation; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Primary axis for this placement.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Horizontal,
            Self::Left | Self::Right => Axis::Vertical,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self.axis(), Axis::Horizontal)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" | "t" | "north" => Some(Self::Top),
            "bottom" | "b" | "south" => Some(Self::Bottom),
            "left" | "l" | "west" => Some(Self::Left),
            "right" | "r" | "east" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a placement name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError(pub String);

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tab placement '{}' (expected top, bottom, left or right)",
            self.0
        )
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseOrientationError(s.to_owned()))
    }
}
