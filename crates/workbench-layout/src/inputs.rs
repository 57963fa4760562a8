#![forbid(unsafe_code)]

//! Per-pass layout inputs.

use workbench_core::geometry::{Insets, Rect, Size};

/// Sizes reported by a toolbar docked next to the tabs or the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toolbar {
    pub minimum: Size,
    pub preferred: Size,
}

impl Toolbar {
    pub const fn new(minimum: Size, preferred: Size) -> Self {
        Self { minimum, preferred }
    }

    /// A toolbar whose minimum and preferred sizes agree.
    pub const fn fixed(size: Size) -> Self {
        Self::new(size, size)
    }
}

/// Immutable snapshot of everything a layout pass reads.
///
/// The driver builds one of these per pass and updates only
/// [`position`](Self::position) and [`more_rect`](Self::more_rect) as it
/// walks the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInputs {
    /// Size of the tabs container.
    pub container: Size,
    /// Container insets.
    pub insets: Insets,
    /// Rectangle allotted to the strip itself. Right placement measures from
    /// its width; defaults to the container size.
    pub layout_size: Size,
    /// Preferred header size: its height is the horizontal strip thickness,
    /// its width the vertical strip thickness.
    pub header_fit: Size,
    /// Toolbar docked above the content or after the tab row.
    pub h_toolbar: Option<Toolbar>,
    /// Toolbar docked beside the content.
    pub v_toolbar: Option<Toolbar>,
    /// Accumulated position along the primary axis.
    pub position: i32,
    /// Offset of the content area below a horizontal strip.
    pub comp_position: i32,
    /// Visible ghost placeholder before the first tab.
    pub first_ghost: Option<Size>,
    /// Visible ghost placeholder after the last tab.
    pub last_ghost: Option<Size>,
    /// Overflow indicator placed by the driver during this pass.
    pub more_rect: Option<Rect>,
    /// Tabs are hidden; content takes the whole container.
    pub hide_tabs: bool,
    /// Side component is stacked vertically instead of sitting on the tab row.
    pub side_component_vertical: bool,
}

impl LayoutInputs {
    /// Inputs for a container with the given insets and header size.
    pub const fn new(container: Size, insets: Insets, header_fit: Size) -> Self {
        Self {
            container,
            insets,
            layout_size: container,
            header_fit,
            h_toolbar: None,
            v_toolbar: None,
            position: 0,
            comp_position: 0,
            first_ghost: None,
            last_ghost: None,
            more_rect: None,
            hide_tabs: false,
            side_component_vertical: false,
        }
    }

    #[must_use]
    pub const fn with_layout_size(mut self, layout_size: Size) -> Self {
        self.layout_size = layout_size;
        self
    }

    #[must_use]
    pub const fn with_h_toolbar(mut self, toolbar: Toolbar) -> Self {
        self.h_toolbar = Some(toolbar);
        self
    }

    #[must_use]
    pub const fn with_v_toolbar(mut self, toolbar: Toolbar) -> Self {
        self.v_toolbar = Some(toolbar);
        self
    }

    #[must_use]
    pub const fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn with_comp_position(mut self, comp_position: i32) -> Self {
        self.comp_position = comp_position;
        self
    }

    #[must_use]
    pub const fn with_first_ghost(mut self, ghost: Size) -> Self {
        self.first_ghost = Some(ghost);
        self
    }

    #[must_use]
    pub const fn with_last_ghost(mut self, ghost: Size) -> Self {
        self.last_ghost = Some(ghost);
        self
    }

    #[must_use]
    pub const fn with_more_rect(mut self, rect: Option<Rect>) -> Self {
        self.more_rect = rect;
        self
    }

    #[must_use]
    pub const fn with_hidden_tabs(mut self, hidden: bool) -> Self {
        self.hide_tabs = hidden;
        self
    }

    #[must_use]
    pub const fn with_side_component_vertical(mut self, vertical: bool) -> Self {
        self.side_component_vertical = vertical;
        self
    }
}
