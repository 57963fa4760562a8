#![forbid(unsafe_code)]

//! Content-area placement next to the tab strip.

use workbench_core::geometry::{Insets, Rect, Size};

use crate::inputs::LayoutInputs;
use crate::style::TabStripStyle;

/// Where the content area and the docked toolbars end up after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentLayout {
    pub content: Rect,
    pub h_toolbar: Option<Rect>,
    pub v_toolbar: Option<Rect>,
}

impl ContentLayout {
    const fn content_only(content: Rect) -> Self {
        Self {
            content,
            h_toolbar: None,
            v_toolbar: None,
        }
    }
}

/// Content rectangle offset by `(x, y)` inside the insets and border, then
/// resized by `delta`. The border collapses when tabs are hidden.
pub(crate) const fn place(
    inputs: &LayoutInputs,
    style: &TabStripStyle,
    x: i32,
    y: i32,
    delta: Size,
) -> Rect {
    let border = if inputs.hide_tabs {
        Insets::all(0)
    } else {
        style.border
    };
    Rect::from_size(inputs.container)
        .inner(inputs.insets)
        .inner(Insets::new(y, 0, 0, x))
        .inner(border)
        .resized_by(delta)
}

/// Like [`place`], reserving room for a toolbar above or beside the content.
///
/// A horizontal toolbar takes precedence over a vertical one.
pub(crate) fn place_with_toolbars(
    inputs: &LayoutInputs,
    style: &TabStripStyle,
    dx: i32,
    dy: i32,
    delta: Size,
) -> ContentLayout {
    if let Some(toolbar) = inputs.h_toolbar {
        let height = toolbar.preferred.height;
        let content = place(inputs, style, dx, dy + height, delta);
        return ContentLayout {
            content,
            h_toolbar: Some(Rect::new(
                content.x,
                content.y - height,
                content.width,
                height,
            )),
            v_toolbar: None,
        };
    }
    if let Some(toolbar) = inputs.v_toolbar {
        let width = toolbar.preferred.width;
        let content = place(inputs, style, dx + width, dy, delta);
        return ContentLayout {
            content,
            h_toolbar: None,
            v_toolbar: Some(Rect::new(
                content.x - width,
                content.y,
                width,
                content.height,
            )),
        };
    }
    ContentLayout::content_only(place(inputs, style, dx, dy, delta))
}

/// Top placement: content below the strip, a horizontal toolbar after the
/// last tab (or the overflow indicator) on the tab row.
pub(crate) fn place_below_top_strip(
    inputs: &LayoutInputs,
    style: &TabStripStyle,
) -> ContentLayout {
    let x = inputs.v_toolbar.map_or(0, |t| t.preferred.width + 1);
    let y = inputs.comp_position + inputs.header_fit.height + 1;
    let content = place(inputs, style, x, y, Size::ZERO);

    if inputs.h_toolbar.is_some() {
        let toolbar_x = match inputs.more_rect {
            Some(more) => more.max_x() + style.toolbar_inset,
            None => inputs.position + style.toolbar_inset,
        };
        let toolbar = Rect::new(
            toolbar_x,
            inputs.insets.top + 1,
            inputs.container.width - inputs.insets.left - toolbar_x,
            inputs.header_fit.height,
        );
        return ContentLayout {
            content,
            h_toolbar: Some(toolbar),
            v_toolbar: None,
        };
    }
    if let Some(toolbar) = inputs.v_toolbar {
        let width = toolbar.preferred.width;
        return ContentLayout {
            content,
            h_toolbar: None,
            v_toolbar: Some(Rect::new(
                content.x - width - 1,
                content.y,
                width,
                content.height,
            )),
        };
    }
    ContentLayout::content_only(content)
}
