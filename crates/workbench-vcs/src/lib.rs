#![forbid(unsafe_code)]

//! Version-control mapping detection for project modules.
//!
//! The host implements [`ProjectModel`] (modules and their content roots)
//! and [`VcsManager`] (VCS lookup and directory mappings); the
//! [`ModuleVcsDetector`] keeps the mappings in step as modules come and go.

pub mod detector;
pub mod mapping;

pub use detector::{DetectionOutcome, DetectorConfig, ModuleVcsDetector, ProjectEvent};
pub use mapping::{DirectoryMapping, Module, PROJECT_DIRECTORY, ProjectModel, VcsManager};
