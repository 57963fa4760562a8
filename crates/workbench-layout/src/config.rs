#![forbid(unsafe_code)]

//! Tab strip configuration.
//!
//! Configuration is JSON with every field optional:
//!
//! ```
//! use workbench_layout::{Orientation, TabStripConfig};
//!
//! let config = TabStripConfig::from_json(r#"{"placement":"right","stretch_tabs":false}"#)
//!     .expect("valid config");
//! assert_eq!(config.placement, Orientation::Right);
//! ```
//!
//! Environment variables override the parsed values. Lookups go through a
//! caller-supplied function so tests never touch the process environment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::single_row::SingleRowLayout;
use crate::strategy::Strategy;
use crate::style::TabStripStyle;

/// Environment variable to override the strip placement (`top`, `bottom`, `left`, `right`).
pub const ENV_TAB_PLACEMENT: &str = "WORKBENCH_TAB_PLACEMENT";
/// Environment variable to override tab stretching (`1/0/true/false`).
pub const ENV_TABS_STRETCH: &str = "WORKBENCH_TABS_STRETCH";

/// Errors raised while loading a tab strip configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    Json(serde_json::Error),
    /// A placement name (from an override) is not recognised.
    UnknownPlacement(String),
    /// A style metric that must be non-negative is negative.
    InvalidStyle { field: &'static str, value: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "tab strip config: {err}"),
            Self::UnknownPlacement(name) => write!(f, "unknown tab placement '{name}'"),
            Self::InvalidStyle { field, value } => {
                write!(f, "tab strip style '{field}' must not be negative (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// User-facing tab strip settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripConfig {
    /// Edge the strip is docked to.
    pub placement: Orientation,
    /// Widen tabs to fill a horizontal strip.
    pub stretch_tabs: bool,
    pub style: TabStripStyle,
}

impl TabStripConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative style metrics.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.style.first_negative_field() {
            Some((field, value)) => Err(ConfigError::InvalidStyle { field, value }),
            None => Ok(()),
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using a custom environment lookup (for tests).
    pub fn with_overrides_from<F>(mut self, get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = get_env(ENV_TAB_PLACEMENT) {
            self.placement = Orientation::parse(&value)
                .ok_or_else(|| ConfigError::UnknownPlacement(value.trim().to_owned()))?;
        }
        if let Some(value) = get_env(ENV_TABS_STRETCH)
            && let Some(stretch) = parse_bool(&value)
        {
            self.stretch_tabs = stretch;
        }
        Ok(self)
    }

    /// Strategy for the configured placement.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        Strategy::new(self.placement, self.style)
    }

    /// Pass driver with the configured stretching.
    #[must_use]
    pub const fn single_row(&self) -> SingleRowLayout {
        SingleRowLayout::new().stretch(self.stretch_tabs)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use workbench_core::geometry::Size;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = TabStripConfig::from_json("{}").expect("empty object is valid");
        assert_eq!(config, TabStripConfig::default());
        assert_eq!(config.placement, Orientation::Top);
    }

    #[test]
    fn style_fields_are_individually_optional() {
        let config =
            TabStripConfig::from_json(r#"{"style":{"more_icon":{"width":12,"height":14}}}"#)
                .expect("partial style is valid");
        assert_eq!(config.style.more_icon, Size::new(12, 14));
        assert_eq!(config.style.toolbar_inset, TabStripStyle::default().toolbar_inset);
    }

    #[test]
    fn negative_style_is_rejected() {
        let err = TabStripConfig::from_json(r#"{"style":{"toolbar_inset":-3}}"#)
            .expect_err("negative inset");
        assert!(matches!(
            err,
            ConfigError::InvalidStyle {
                field: "toolbar_inset",
                value: -3
            }
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = TabStripConfig::from_json("{placement").expect_err("not json");
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("tab strip config:"));
    }

    #[test]
    fn env_overrides_apply() {
        let config = TabStripConfig::default()
            .with_overrides_from(env(&[(ENV_TAB_PLACEMENT, "Left"), (ENV_TABS_STRETCH, "1")]))
            .expect("valid overrides");
        assert_eq!(config.placement, Orientation::Left);
        assert!(config.stretch_tabs);
    }

    #[test]
    fn unknown_placement_override_fails() {
        let err = TabStripConfig::default()
            .with_overrides_from(env(&[(ENV_TAB_PLACEMENT, "middle")]))
            .expect_err("unknown placement");
        assert!(matches!(err, ConfigError::UnknownPlacement(ref name) if name == "middle"));
    }

    #[test]
    fn unparseable_stretch_override_is_ignored() {
        let config = TabStripConfig {
            stretch_tabs: true,
            ..TabStripConfig::default()
        }
        .with_overrides_from(env(&[(ENV_TABS_STRETCH, "maybe")]))
        .expect("ignored");
        assert!(config.stretch_tabs);
    }

    #[test]
    fn strategy_reflects_placement() {
        let config = TabStripConfig {
            placement: Orientation::Bottom,
            ..TabStripConfig::default()
        };
        assert_eq!(config.strategy().orientation(), Orientation::Bottom);
    }
}
