#![forbid(unsafe_code)]

//! Directory mappings and the host interfaces the detector works against.

use serde::{Deserialize, Serialize};

/// Directory of the project-wide mapping.
pub const PROJECT_DIRECTORY: &str = "";

/// Association of a directory with the VCS that versions it.
///
/// An empty [`directory`](Self::directory) stands for the whole project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectoryMapping {
    pub directory: String,
    pub vcs: String,
}

impl DirectoryMapping {
    pub fn new(directory: impl Into<String>, vcs: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            vcs: vcs.into(),
        }
    }

    /// Mapping for the whole project.
    pub fn project(vcs: impl Into<String>) -> Self {
        Self::new(PROJECT_DIRECTORY, vcs)
    }

    #[inline]
    pub fn is_project(&self) -> bool {
        self.directory.is_empty()
    }

    /// Whether this mapping's directory is `path`, ignoring separator style.
    pub fn covers(&self, path: &str) -> bool {
        system_independent(&self.directory) == path
    }
}

/// A project module and its content roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    /// Content root paths, `/`-separated.
    pub content_roots: Vec<String>,
}

impl Module {
    pub fn new<I, S>(name: impl Into<String>, content_roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            content_roots: content_roots.into_iter().map(Into::into).collect(),
        }
    }
}

/// Read access to the project's module structure.
pub trait ProjectModel {
    /// All modules currently in the project.
    fn modules(&self) -> Vec<Module>;
}

/// The project's VCS registry and its directory mappings.
pub trait VcsManager {
    /// VCS whose metadata is found at or above `root`, if any.
    fn find_versioning_vcs(&self, root: &str) -> Option<String>;

    /// VCS currently mapped for `root`, if any.
    fn vcs_for(&self, root: &str) -> Option<String>;

    /// Current mappings, in registry order.
    fn directory_mappings(&self) -> Vec<DirectoryMapping>;

    /// Record a mapping that was detected rather than chosen by the user.
    fn set_auto_directory_mapping(&mut self, directory: &str, vcs: &str);

    fn remove_directory_mapping(&mut self, mapping: &DirectoryMapping);

    /// Drop duplicate and redundant mappings.
    fn cleanup_mappings(&mut self);

    /// True until the user edits the mappings by hand.
    fn need_autodetect_mappings(&self) -> bool;

    /// Activate the VCSes referenced by the mappings.
    fn update_active_vcses(&mut self);
}

/// `path` with `\` separators replaced by `/`.
pub fn system_independent(path: &str) -> std::borrow::Cow<'_, str> {
    if path.contains('\\') {
        std::borrow::Cow::Owned(path.replace('\\', "/"))
    } else {
        std::borrow::Cow::Borrowed(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_mapping_has_empty_directory() {
        let mapping = DirectoryMapping::project("git");
        assert!(mapping.is_project());
        assert_eq!(mapping.vcs, "git");
    }

    #[test]
    fn covers_ignores_separator_style() {
        let mapping = DirectoryMapping::new(r"C:\work\app", "hg");
        assert!(mapping.covers("C:/work/app"));
        assert!(!mapping.covers("C:/work"));
    }

    #[test]
    fn mapping_serializes_as_plain_fields() {
        let mapping = DirectoryMapping::new("/repo/a", "git");
        let json = serde_json::to_string(&mapping).expect("serialize");
        assert_eq!(json, r#"{"directory":"/repo/a","vcs":"git"}"#);
    }

    #[test]
    fn module_collects_roots() {
        let module = Module::new("core", ["/repo/core", "/repo/core-gen"]);
        assert_eq!(module.content_roots.len(), 2);
    }
}
