#![forbid(unsafe_code)]

//! Container metrics that stay constant across layout passes.

use serde::{Deserialize, Serialize};
use workbench_core::geometry::{Insets, Size};

/// Size of the default "more tabs" icon.
pub const DEFAULT_MORE_ICON: Size = Size::new(16, 16);

/// Gap between the last tab (or the overflow indicator) and a docked toolbar.
pub const DEFAULT_TOOLBAR_INSET: i32 = 5;

/// Vertical shift applied to the selected tab.
pub const DEFAULT_SELECTION_TAB_VSHIFT: i32 = 2;

/// Look-and-feel metrics of a tab strip.
///
/// These are the values a strategy needs from its host container besides
/// the per-pass [`LayoutInputs`](crate::LayoutInputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripStyle {
    /// Icon shown by the overflow indicator.
    pub more_icon: Size,
    /// Gap before a horizontal toolbar docked next to the tabs.
    pub toolbar_inset: i32,
    /// Shift of the selected tab towards the content area.
    pub selection_tab_vshift: i32,
    /// Effective border drawn around the tabs and content.
    pub border: Insets,
}

impl Default for TabStripStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TabStripStyle {
    /// Default metrics, usable in const contexts.
    pub const DEFAULT: Self = Self {
        more_icon: DEFAULT_MORE_ICON,
        toolbar_inset: DEFAULT_TOOLBAR_INSET,
        selection_tab_vshift: DEFAULT_SELECTION_TAB_VSHIFT,
        border: Insets::all(0),
    };

    #[must_use]
    pub const fn more_icon(mut self, icon: Size) -> Self {
        self.more_icon = icon;
        self
    }

    #[must_use]
    pub const fn toolbar_inset(mut self, inset: i32) -> Self {
        self.toolbar_inset = inset;
        self
    }

    #[must_use]
    pub const fn selection_tab_vshift(mut self, shift: i32) -> Self {
        self.selection_tab_vshift = shift;
        self
    }

    #[must_use]
    pub const fn border(mut self, border: Insets) -> Self {
        self.border = border;
        self
    }

    /// First field holding a negative value, if any.
    pub(crate) fn first_negative_field(&self) -> Option<(&'static str, i32)> {
        let fields = [
            ("more_icon.width", self.more_icon.width),
            ("more_icon.height", self.more_icon.height),
            ("toolbar_inset", self.toolbar_inset),
            ("border.top", self.border.top),
            ("border.right", self.border.right),
            ("border.bottom", self.border.bottom),
            ("border.left", self.border.left),
        ];
        fields.into_iter().find(|&(_, value)| value < 0)
    }
}
