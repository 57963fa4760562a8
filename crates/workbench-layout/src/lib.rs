#![forbid(unsafe_code)]

//! Single-row tab strip layout.
//!
//! # Role in workbench
//! `workbench-layout` computes the pixel geometry of a row (or column) of
//! tab headers docked to one edge of a container, plus the content area
//! next to it. It never paints or hit-tests; the host toolkit applies the
//! returned rectangles.
//!
//! # Pieces
//! - [`Orientation`]: which edge the strip is docked to.
//! - [`Strategy`]: every placement-dependent formula.
//! - [`LayoutInputs`] / [`TabStripStyle`]: per-pass and per-container inputs.
//! - [`SingleRowLayout`]: the pass driver that walks the tabs.
//! - [`TabStripConfig`]: serde-backed settings with env overrides.
//!
//! ```
//! use workbench_layout::{Insets, LayoutInputs, Orientation, SingleRowLayout, Size, Strategy};
//!
//! let strategy = Strategy::from(Orientation::Top);
//! let inputs = LayoutInputs::new(Size::new(800, 600), Insets::all(5), Size::new(40, 30));
//! let tabs = [Size::new(100, 24), Size::new(120, 24), Size::new(80, 24)];
//!
//! let pass = SingleRowLayout::new().layout(&strategy, &inputs, &tabs);
//! let xs: Vec<i32> = pass.tabs.iter().map(|slot| slot.rect.x).collect();
//! assert_eq!(xs, [5, 105, 225]);
//! ```

pub mod config;
pub mod content;
pub mod inputs;
pub mod orientation;
pub mod single_row;
pub mod strategy;
pub mod style;

pub use config::{ConfigError, TabStripConfig};
pub use content::ContentLayout;
pub use inputs::{LayoutInputs, Toolbar};
pub use orientation::{Axis, Orientation, ParseOrientationError};
pub use single_row::{SingleRowLayout, SingleRowPass, TabSlot};
pub use strategy::Strategy;
pub use style::TabStripStyle;
pub use workbench_core::geometry::{Insets, Rect, Size};
