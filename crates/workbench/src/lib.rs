#![forbid(unsafe_code)]

//! Workbench public facade crate.
//!
//! Re-exports the tab strip layout and VCS detection crates, loads
//! configuration files, and offers a small prelude.

use std::path::Path;

pub mod error;

pub use error::{Error, Result};

// --- Geometry re-exports ----------------------------------------------------

pub use workbench_core::geometry::{Insets, Rect, Size};

// --- Layout re-exports ------------------------------------------------------

pub use workbench_layout::{
    Axis, ConfigError, ContentLayout, LayoutInputs, Orientation, SingleRowLayout, SingleRowPass,
    Strategy, TabSlot, TabStripConfig, TabStripStyle, Toolbar,
};

// --- VCS re-exports ---------------------------------------------------------

pub use workbench_vcs::{
    DetectionOutcome, DetectorConfig, DirectoryMapping, Module, ModuleVcsDetector, ProjectEvent,
    ProjectModel, VcsManager,
};

/// Load a tab strip configuration file and apply environment overrides.
pub fn load_tab_strip_config(path: impl AsRef<Path>) -> Result<TabStripConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let config = TabStripConfig::from_json(&json)?.with_env_overrides()?;

    #[cfg(feature = "tracing")]
    workbench_core::debug!(
        path = %path.display(),
        placement = %config.placement,
        stretch_tabs = config.stretch_tabs,
        "loaded tab strip config"
    );

    Ok(config)
}

/// Like [`load_tab_strip_config`], falling back to defaults when the file
/// does not exist.
pub fn load_tab_strip_config_or_default(path: impl AsRef<Path>) -> Result<TabStripConfig> {
    match load_tab_strip_config(path) {
        Err(err) if err.is_recoverable() => Ok(TabStripConfig::default().with_env_overrides()?),
        other => other,
    }
}

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Insets, LayoutInputs, ModuleVcsDetector, Orientation, ProjectEvent, Rect, Result,
        SingleRowLayout, Size, Strategy, TabStripConfig,
    };
    pub use crate::{core, layout, vcs};
}

pub use workbench_core as core;
pub use workbench_layout as layout;
pub use workbench_vcs as vcs;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"placement":"bottom","style":{{"toolbar_inset":2}}}}"#).expect("write");
        let config = load_tab_strip_config(file.path()).expect("valid config");
        assert_eq!(config.style.toolbar_inset, 2);
    }

    #[test]
    fn broken_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");
        let err = load_tab_strip_config(file.path()).expect_err("broken");
        assert!(matches!(err, Error::Config(ConfigError::Json(_))));
        assert!(load_tab_strip_config_or_default(file.path()).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("tabs.json");
        assert!(matches!(load_tab_strip_config(&missing), Err(Error::Io(_))));
        let config = load_tab_strip_config_or_default(&missing).expect("defaults");
        assert_eq!(config.style, TabStripStyle::default());
    }
}
