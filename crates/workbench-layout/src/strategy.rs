#![forbid(unsafe_code)]

//! Per-placement geometry of a single-row tab strip.
//!
//! A [`Strategy`] answers every axis-dependent question a layout pass asks:
//! where the first tab starts, how much room the tabs get, how thick the
//! strip is, where the overflow indicator goes and how much the adjacent
//! content area shrinks.
//!
//! Top and Bottom share the [`horizontal`] formulas, Left and Right share
//! the [`vertical`] ones; only the fixed-axis anchor, the overflow anchor
//! and the content placement differ per placement.
//!
//! # Invariants
//!
//! 1. Every operation is a pure function of the strategy and its arguments.
//! 2. The fixed-axis length is the same for every tab of a pass.
//! 3. Horizontal rectangles are `(position, fixed)`, vertical ones are
//!    `(fixed, position)`; Right is one pixel thinner than Left.
//!
//! # Failure Modes
//!
//! None. Inputs are not validated and negative results are returned as-is.

use workbench_core::geometry::{Rect, Size};

use crate::content::{self, ContentLayout};
use crate::inputs::LayoutInputs;
use crate::orientation::{Axis, Orientation};
use crate::style::TabStripStyle;

/// Padding added to the icon width of a horizontal overflow indicator.
pub const HORIZONTAL_MORE_PADDING: i32 = 6;

/// Padding added to the icon height of a vertical overflow indicator.
pub const VERTICAL_MORE_PADDING: i32 = 4;

/// Geometry strategy for one tab strip placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    orientation: Orientation,
    style: TabStripStyle,
}

impl Strategy {
    pub const fn new(orientation: Orientation, style: TabStripStyle) -> Self {
        Self { orientation, style }
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub const fn style(&self) -> &TabStripStyle {
        &self.style
    }

    /// Extent of the overflow indicator along the primary axis.
    pub const fn overflow_indicator_size(&self) -> i32 {
        match self.orientation.axis() {
            Axis::Horizontal => self.style.more_icon.width + HORIZONTAL_MORE_PADDING,
            Axis::Vertical => self.style.more_icon.height + VERTICAL_MORE_PADDING,
        }
    }

    /// Where the first tab starts on the primary axis.
    pub const fn start_position(&self, inputs: &LayoutInputs) -> i32 {
        match self.orientation.axis() {
            Axis::Horizontal => horizontal::start_position(inputs),
            Axis::Vertical => vertical::start_position(inputs),
        }
    }

    /// Room along the primary axis the tabs have to fit into.
    pub fn available_length(&self, inputs: &LayoutInputs) -> i32 {
        match self.orientation.axis() {
            Axis::Horizontal => horizontal::available_length(inputs),
            Axis::Vertical => vertical::available_length(inputs),
        }
    }

    /// Projection of a tab's preferred size onto the primary axis.
    pub const fn primary_increment(&self, size: Size) -> i32 {
        match self.orientation.axis() {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Far edge of `bounds` along the primary axis.
    pub const fn max_position(&self, bounds: Rect) -> i32 {
        match self.orientation.axis() {
            Axis::Horizontal => bounds.max_x(),
            Axis::Vertical => bounds.max_y(),
        }
    }

    /// Thickness of the strip.
    pub const fn fixed_axis_length(&self, inputs: &LayoutInputs) -> i32 {
        match self.orientation.axis() {
            Axis::Horizontal => inputs.header_fit.height,
            Axis::Vertical => inputs.header_fit.width,
        }
    }

    /// Where the strip sits on the fixed axis.
    pub const fn fixed_axis_position(&self, inputs: &LayoutInputs) -> i32 {
        match self.orientation {
            Orientation::Top => inputs.insets.top,
            Orientation::Bottom => {
                inputs.container.height - inputs.insets.bottom - inputs.header_fit.height - 1
            }
            Orientation::Left => inputs.insets.left,
            Orientation::Right => {
                inputs.layout_size.width - inputs.header_fit.width - inputs.insets.right
            }
        }
    }

    /// Rectangle of a tab header from primary/fixed coordinates.
    pub const fn tab_rect(
        &self,
        position: i32,
        fixed_position: i32,
        length: i32,
        fixed_length: i32,
    ) -> Rect {
        match self.orientation {
            Orientation::Top | Orientation::Bottom => {
                Rect::new(position, fixed_position, length, fixed_length)
            }
            Orientation::Left => Rect::new(fixed_position, position, fixed_length, length),
            Orientation::Right => Rect::new(fixed_position, position, fixed_length - 1, length),
        }
    }

    /// Rectangle reserved for the overflow indicator.
    pub const fn overflow_rect(&self, inputs: &LayoutInputs) -> Rect {
        let axis_size = self.overflow_indicator_size();
        match self.orientation {
            Orientation::Top => {
                let ghost = match inputs.last_ghost {
                    Some(ghost) => ghost.width,
                    None => 0,
                };
                Rect::new(
                    inputs.position + ghost,
                    inputs.insets.top + self.style.selection_tab_vshift,
                    axis_size - 1,
                    inputs.header_fit.height - 1,
                )
            }
            Orientation::Bottom => Rect::new(
                inputs.container.width - inputs.insets.right - axis_size + 2,
                self.fixed_axis_position(inputs),
                axis_size - 1,
                inputs.header_fit.height - 1,
            ),
            Orientation::Left => Rect::new(
                inputs.insets.left + self.style.selection_tab_vshift,
                vertical::overflow_y(inputs, axis_size),
                inputs.header_fit.width - 1,
                axis_size - 1,
            ),
            Orientation::Right => Rect::new(
                inputs.layout_size.width - inputs.header_fit.width,
                vertical::overflow_y(inputs, axis_size),
                inputs.header_fit.width - 1,
                axis_size - 1,
            ),
        }
    }

    /// How much the content area shrinks to make room for the strip.
    pub const fn content_size_delta(&self, inputs: &LayoutInputs) -> Size {
        match self.orientation {
            Orientation::Top | Orientation::Left => Size::ZERO,
            Orientation::Bottom => Size::new(0, -(inputs.header_fit.height + 1)),
            Orientation::Right => Size::new(-inputs.header_fit.width, 0),
        }
    }

    /// Whether tabs may be widened to fill the strip.
    pub const fn can_stretch_tabs(&self) -> bool {
        self.orientation.is_horizontal()
    }

    /// Whether stretched tabs center their label.
    pub const fn centers_text_when_stretched(&self) -> bool {
        self.orientation.is_horizontal()
    }

    /// Whether the side component shares the row with the tabs.
    pub const fn side_component_on_tabs(&self, inputs: &LayoutInputs) -> bool {
        match self.orientation {
            Orientation::Top => !inputs.side_component_vertical,
            _ => false,
        }
    }

    /// Place the content area and any docked toolbar next to the strip.
    pub fn layout_content_area(&self, inputs: &LayoutInputs) -> ContentLayout {
        if inputs.hide_tabs {
            return content::place_with_toolbars(inputs, &self.style, 0, 0, Size::ZERO);
        }
        let header = inputs.header_fit;
        let border = self.style.border;
        match self.orientation {
            Orientation::Top => content::place_below_top_strip(inputs, &self.style),
            Orientation::Bottom => content::place_with_toolbars(
                inputs,
                &self.style,
                0,
                0,
                Size::new(0, -(header.height + border.top + 1)),
            ),
            Orientation::Left => content::place_with_toolbars(
                inputs,
                &self.style,
                header.width + border.right + 1,
                0,
                Size::ZERO,
            ),
            Orientation::Right => content::place_with_toolbars(
                inputs,
                &self.style,
                0,
                0,
                Size::new(-(header.width + border.left), 0),
            ),
        }
    }
}

impl From<Orientation> for Strategy {
    fn from(orientation: Orientation) -> Self {
        Self::new(orientation, TabStripStyle::default())
    }
}

/// Formulas shared by Top and Bottom.
mod horizontal {
    use crate::inputs::LayoutInputs;

    pub(super) const fn start_position(inputs: &LayoutInputs) -> i32 {
        inputs.insets.left
    }

    pub(super) fn available_length(inputs: &LayoutInputs) -> i32 {
        let toolbar = inputs.h_toolbar.map_or(0, |t| t.minimum.width);
        inputs.container.width - inputs.insets.horizontal_sum() - toolbar
    }
}

/// Formulas shared by Left and Right.
mod vertical {
    use crate::inputs::LayoutInputs;

    pub(super) const fn start_position(inputs: &LayoutInputs) -> i32 {
        inputs.insets.top
    }

    pub(super) fn available_length(inputs: &LayoutInputs) -> i32 {
        inputs.container.height - inputs.insets.vertical_sum()
    }

    pub(super) const fn overflow_y(inputs: &LayoutInputs, axis_size: i32) -> i32 {
        inputs.container.height - inputs.insets.bottom - axis_size - 1
    }
}
