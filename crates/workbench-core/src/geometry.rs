#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are signed pixels. Layout formulas may legitimately produce
//! negative extents for pathological insets; nothing here clamps them, so
//! the caller decides how to treat such results.

use serde::{Deserialize, Serialize};

/// A rectangle in container coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Grow (or, with a negative delta, shrink) width and height.
    #[inline]
    pub const fn resized_by(&self, delta: Size) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width + delta.width,
            self.height + delta.height,
        )
    }

    /// Create a new rectangle inside the current one with the given insets.
    pub const fn inner(&self, insets: Insets) -> Rect {
        Rect {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.horizontal_sum(),
            height: self.height - insets.vertical_sum(),
        }
    }
}

/// A width/height pair.
///
/// Also used as a size delta, in which case components may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// The zero size (or "no change" when used as a delta).
    pub const ZERO: Size = Size::new(0, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

/// Edge insets (padding, borders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    /// Insets with the same value on every edge.
    pub const fn all(val: i32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create insets with specific values (CSS order: top, right, bottom, left).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> i32 {
        self.top + self.bottom
    }
}

impl From<i32> for Insets {
    fn from(val: i32) -> Self {
        Self::all(val)
    }
}

impl From<(i32, i32, i32, i32)> for Insets {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

#[cfg(test)]
mod tests {
    use super::{Insets, Rect, Size};

    #[test]
    fn rect_edges() {
        let rect = Rect::new(5, 7, 100, 30);
        assert_eq!(rect.max_x(), 105);
        assert_eq!(rect.max_y(), 37);
    }

    #[test]
    fn inner_keeps_negative_extents() {
        let rect = Rect::from_size(Size::new(10, 10)).inner(Insets::all(8));
        assert_eq!(rect, Rect::new(8, 8, -6, -6));
    }

    #[test]
    fn resized_by_applies_delta() {
        let rect = Rect::new(1, 1, 50, 40).resized_by(Size::new(0, -31));
        assert_eq!(rect, Rect::new(1, 1, 50, 9));
    }

    #[test]
    fn insets_constructors_and_sums() {
        assert_eq!(Insets::all(3), Insets::from(3));
        let insets = Insets::from((1, 2, 3, 4));
        assert_eq!(
            insets,
            Insets {
                top: 1,
                right: 2,
                bottom: 3,
                left: 4,
            }
        );
        assert_eq!(insets.horizontal_sum(), 6);
        assert_eq!(insets.vertical_sum(), 4);
    }

    #[test]
    fn insets_deserialize_with_missing_edges() {
        let insets: Insets = serde_json::from_str(r#"{"top":2,"left":1}"#).expect("valid json");
        assert_eq!(insets, Insets::new(2, 0, 0, 1));
    }
}
