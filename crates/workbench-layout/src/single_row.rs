#![forbid(unsafe_code)]

//! Single-row layout pass.
//!
//! Walks the tabs in order, accumulating positions along the primary axis,
//! and asks the [`Strategy`] for every rectangle. When the tabs do not fit,
//! room for the overflow indicator is reserved at the trailing end and the
//! tabs that no longer fit are reported as hidden.

use workbench_core::geometry::{Rect, Size};

use crate::content::ContentLayout;
use crate::inputs::LayoutInputs;
use crate::strategy::Strategy;

/// A tab that received a rectangle in this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    /// Index into the tab sizes handed to the pass.
    pub index: usize,
    pub rect: Rect,
}

/// Result of one single-row layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRowPass {
    /// Visible tabs in layout order.
    pub tabs: Vec<TabSlot>,
    /// Indices of tabs that did not fit.
    pub hidden: Vec<usize>,
    /// Primary-axis position after the last visible tab.
    pub end_position: i32,
    /// Overflow indicator, present only when some tab is hidden.
    pub more_rect: Option<Rect>,
    /// Content area and toolbars.
    pub content: ContentLayout,
}

impl SingleRowPass {
    #[inline]
    pub fn overflowed(&self) -> bool {
        !self.hidden.is_empty()
    }
}

/// Layout pass driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleRowLayout {
    stretch: bool,
}

impl SingleRowLayout {
    pub const fn new() -> Self {
        Self { stretch: false }
    }

    /// Spread leftover length across the tabs when the strategy allows it.
    #[must_use]
    pub const fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Lay out `tabs` (preferred sizes, in display order).
    pub fn layout(
        &self,
        strategy: &Strategy,
        inputs: &LayoutInputs,
        tabs: &[Size],
    ) -> SingleRowPass {
        let fixed_position = strategy.fixed_axis_position(inputs);
        let fixed_length = strategy.fixed_axis_length(inputs);

        let first_ghost = inputs
            .first_ghost
            .map_or(0, |ghost| strategy.primary_increment(ghost));
        let last_ghost = inputs
            .last_ghost
            .map_or(0, |ghost| strategy.primary_increment(ghost));

        let start = strategy.start_position(inputs);
        let limit = start + strategy.available_length(inputs);
        let lengths: Vec<i32> = tabs.iter().map(|&t| strategy.primary_increment(t)).collect();
        let total: i32 = lengths.iter().sum();

        let mut position = start + first_ghost;
        let fits = position + total + last_ghost <= limit;

        let mut slots = Vec::with_capacity(tabs.len());
        let mut hidden = Vec::new();

        if fits {
            let extra = if self.stretch && strategy.can_stretch_tabs() && !lengths.is_empty() {
                limit - position - total - last_ghost
            } else {
                0
            };
            let per_tab = extra / lengths.len().max(1) as i32;
            let remainder = extra - per_tab * lengths.len() as i32;

            for (index, &length) in lengths.iter().enumerate() {
                let bonus = if index + 1 == lengths.len() {
                    per_tab + remainder
                } else {
                    per_tab
                };
                let length = length + bonus;
                let rect = strategy.tab_rect(position, fixed_position, length, fixed_length);
                slots.push(TabSlot { index, rect });
                position += length;
            }
        } else {
            let tab_limit = limit - strategy.overflow_indicator_size() - last_ghost;
            for (index, &length) in lengths.iter().enumerate() {
                if !hidden.is_empty() || position + length > tab_limit {
                    hidden.push(index);
                    continue;
                }
                let rect = strategy.tab_rect(position, fixed_position, length, fixed_length);
                slots.push(TabSlot { index, rect });
                position += length;
            }
        }

        let mut inputs = inputs.with_position(position);
        let more_rect = if hidden.is_empty() {
            None
        } else {
            Some(strategy.overflow_rect(&inputs))
        };
        inputs = inputs.with_more_rect(more_rect);
        let content = strategy.layout_content_area(&inputs);

        #[cfg(feature = "tracing")]
        workbench_core::debug!(
            orientation = %strategy.orientation(),
            visible = slots.len(),
            hidden = hidden.len(),
            end_position = position,
            "single-row tab pass"
        );

        SingleRowPass {
            tabs: slots,
            hidden,
            end_position: position,
            more_rect,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;
    use workbench_core::geometry::Insets;

    fn inputs() -> LayoutInputs {
        LayoutInputs::new(Size::new(800, 600), Insets::all(5), Size::new(40, 30))
    }

    fn widths(ws: &[i32]) -> Vec<Size> {
        ws.iter().map(|&w| Size::new(w, 24)).collect()
    }

    fn heights(hs: &[i32]) -> Vec<Size> {
        hs.iter().map(|&h| Size::new(60, h)).collect()
    }

    #[test]
    fn top_positions_accumulate() {
        let strategy = Strategy::from(Orientation::Top);
        let pass = SingleRowLayout::new().layout(&strategy, &inputs(), &widths(&[100, 120, 80]));
        let xs: Vec<i32> = pass.tabs.iter().map(|t| t.rect.x).collect();
        assert_eq!(xs, vec![5, 105, 225]);
        assert_eq!(pass.end_position, 305);
        assert!(!pass.overflowed());
        assert_eq!(pass.more_rect, None);
        assert!(pass.tabs.iter().all(|t| t.rect.y == 5 && t.rect.height == 30));
    }

    #[test]
    fn overflow_hides_trailing_tabs() {
        let strategy = Strategy::from(Orientation::Top);
        // limit 795, tab limit 795 - 22 = 773
        let pass = SingleRowLayout::new().layout(&strategy, &inputs(), &widths(&[300, 300, 300]));
        assert_eq!(pass.tabs.len(), 2);
        assert_eq!(pass.hidden, vec![2]);
        assert_eq!(pass.end_position, 605);
        assert_eq!(pass.more_rect.map(|r| r.x), Some(605));
    }

    #[test]
    fn hidden_tabs_stay_hidden_once_overflowed() {
        let strategy = Strategy::from(Orientation::Top);
        let pass = SingleRowLayout::new().layout(&strategy, &inputs(), &widths(&[700, 200, 10]));
        assert_eq!(pass.hidden, vec![1, 2]);
    }

    #[test]
    fn stretch_fills_horizontal_strip() {
        let strategy = Strategy::from(Orientation::Bottom);
        let pass = SingleRowLayout::new()
            .stretch(true)
            .layout(&strategy, &inputs(), &widths(&[100, 100, 100]));
        let total: i32 = pass.tabs.iter().map(|t| t.rect.width).sum();
        assert_eq!(total, 790);
        assert_eq!(pass.end_position, 795);
        assert_eq!(pass.tabs[0].rect.width, 263);
        assert_eq!(pass.tabs[2].rect.width, 264);
    }

    #[test]
    fn stretch_ignored_for_vertical_strip() {
        let strategy = Strategy::from(Orientation::Left);
        let pass = SingleRowLayout::new()
            .stretch(true)
            .layout(&strategy, &inputs(), &heights(&[30, 30]));
        assert_eq!(pass.tabs[1].rect, Rect::new(5, 35, 40, 30));
        assert_eq!(pass.end_position, 65);
    }

    #[test]
    fn first_ghost_shifts_start() {
        let strategy = Strategy::from(Orientation::Top);
        let ghosted = inputs().with_first_ghost(Size::new(50, 24));
        let pass = SingleRowLayout::new().layout(&strategy, &ghosted, &widths(&[100]));
        assert_eq!(pass.tabs[0].rect.x, 55);
    }

    #[test]
    fn right_strip_tabs_are_one_pixel_thinner() {
        let strategy = Strategy::from(Orientation::Right);
        let pass = SingleRowLayout::new().layout(&strategy, &inputs(), &heights(&[30]));
        assert_eq!(pass.tabs[0].rect, Rect::new(755, 5, 39, 30));
    }

    #[test]
    fn empty_tab_list_keeps_start_position() {
        let strategy = Strategy::from(Orientation::Top);
        let pass = SingleRowLayout::new().stretch(true).layout(&strategy, &inputs(), &[]);
        assert!(pass.tabs.is_empty());
        assert_eq!(pass.end_position, 5);
    }
}
