#![forbid(unsafe_code)]

//! Automatic VCS mapping detection for project modules.
//!
//! The detector keeps the project's directory mappings in step with its
//! modules while the user has not edited the mappings by hand:
//!
//! - at startup it maps the whole project to its VCS when every content
//!   root agrees on one, or maps each versioned root individually;
//! - when a module is added, any of its roots versioned by a VCS other than
//!   the currently mapped one gets its own mapping;
//! - when a module is removed, its mappings are dropped on the next roots
//!   change, unless the module is added back in between.
//!
//! The host drives it: call [`ModuleVcsDetector::on_startup`] once, then
//! [`ModuleVcsDetector::on_post_startup`] to start listening, then feed
//! every [`ProjectEvent`] to [`ModuleVcsDetector::handle`].

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::mapping::{DirectoryMapping, Module, PROJECT_DIRECTORY, ProjectModel, VcsManager};

/// Module and root changes the detector reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectEvent {
    /// Content roots are about to change.
    BeforeRootsChange,
    /// Content roots changed.
    RootsChanged,
    ModuleAdded(Module),
    /// A module is about to be removed; its roots are still readable.
    BeforeModuleRemoved(Module),
}

/// Detector settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// When false the detector never touches the mappings (headless hosts).
    pub enabled: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// What a detection run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// The whole project was mapped to one VCS; `removed` per-root mappings
    /// became redundant and were dropped.
    ProjectWide { vcs: String, removed: usize },
    /// `mapped` content roots received their own mapping (always at least one).
    PerRoot { mapped: usize },
    /// Nothing was changed.
    Unchanged,
}

/// Keeps directory mappings in step with project modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleVcsDetector {
    config: DetectorConfig,
    listening: bool,
    removed_module_mappings: Vec<(String, DirectoryMapping)>,
}

impl ModuleVcsDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            listening: false,
            removed_module_mappings: Vec::new(),
        }
    }

    #[inline]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Mappings of removed modules waiting for the next roots change,
    /// tagged with the module name.
    pub fn pending_removals(&self) -> &[(String, DirectoryMapping)] {
        &self.removed_module_mappings
    }

    /// Startup activity: detect mappings if still needed, then activate VCSes.
    pub fn on_startup<P, V>(&mut self, project: &P, vcs: &mut V) -> Option<DetectionOutcome>
    where
        P: ProjectModel + ?Sized,
        V: VcsManager + ?Sized,
    {
        if !self.config.enabled {
            return None;
        }
        let outcome = vcs
            .need_autodetect_mappings()
            .then(|| auto_detect_vcs_mappings(project, vcs, true));
        vcs.update_active_vcses();
        outcome
    }

    /// Post-startup activity: start reacting to [`ProjectEvent`]s.
    pub fn on_post_startup(&mut self) {
        if self.config.enabled {
            self.listening = true;
        }
    }

    /// React to a module or roots change. Events are ignored until
    /// [`on_post_startup`](Self::on_post_startup) has run.
    pub fn handle<P, V>(
        &mut self,
        event: &ProjectEvent,
        project: &P,
        vcs: &mut V,
    ) -> Option<DetectionOutcome>
    where
        P: ProjectModel + ?Sized,
        V: VcsManager + ?Sized,
    {
        if !self.listening {
            return None;
        }
        match event {
            ProjectEvent::BeforeRootsChange => {
                self.removed_module_mappings.clear();
                None
            }
            ProjectEvent::RootsChanged => {
                for (_, mapping) in &self.removed_module_mappings {
                    vcs.remove_directory_mapping(mapping);
                }
                // Only true until the user edits mappings, i.e. while modules
                // are still being detected or added automatically.
                vcs.need_autodetect_mappings()
                    .then(|| auto_detect_vcs_mappings(project, vcs, false))
            }
            ProjectEvent::ModuleAdded(module) => {
                let restored = mappings_for_module(module, vcs);
                self.removed_module_mappings
                    .retain(|pending| !restored.contains(pending));
                let mapped = auto_detect_module_vcs_mapping(module, vcs);
                Some(if mapped == 0 {
                    DetectionOutcome::Unchanged
                } else {
                    DetectionOutcome::PerRoot { mapped }
                })
            }
            ProjectEvent::BeforeModuleRemoved(module) => {
                let mappings = mappings_for_module(module, vcs);
                self.removed_module_mappings.extend(mappings);
                None
            }
        }
    }
}

/// Detect mappings for the whole project.
///
/// If every content root resolves to the same VCS the project is mapped to
/// it as a whole. Otherwise, with `try_map_pieces`, each versioned root is
/// mapped on its own.
pub fn auto_detect_vcs_mappings<P, V>(
    project: &P,
    vcs: &mut V,
    try_map_pieces: bool,
) -> DetectionOutcome
where
    P: ProjectModel + ?Sized,
    V: VcsManager + ?Sized,
{
    let modules = project.modules();
    let mut used: FxHashSet<Option<String>> = FxHashSet::default();
    let mut versioned: BTreeMap<&str, String> = BTreeMap::new();

    for root in modules.iter().flat_map(|m| m.content_roots.iter()) {
        let found = vcs.find_versioning_vcs(root);
        if let Some(name) = &found {
            versioned.insert(root.as_str(), name.clone());
        }
        used.insert(found);
    }

    let outcome = if used.len() == 1 {
        match used.into_iter().next().flatten() {
            Some(name) => map_whole_project(&modules, vcs, name),
            None => DetectionOutcome::Unchanged,
        }
    } else if try_map_pieces {
        for (root, name) in &versioned {
            vcs.set_auto_directory_mapping(root, name);
        }
        vcs.cleanup_mappings();
        if versioned.is_empty() {
            DetectionOutcome::Unchanged
        } else {
            DetectionOutcome::PerRoot {
                mapped: versioned.len(),
            }
        }
    } else {
        DetectionOutcome::Unchanged
    };

    #[cfg(feature = "tracing")]
    workbench_core::info!(
        modules = modules.len(),
        try_map_pieces,
        outcome = ?outcome,
        "vcs mapping autodetection"
    );

    outcome
}

fn map_whole_project<V>(modules: &[Module], vcs: &mut V, name: String) -> DetectionOutcome
where
    V: VcsManager + ?Sized,
{
    let content_roots: FxHashSet<&str> = modules
        .iter()
        .flat_map(|m| m.content_roots.iter().map(String::as_str))
        .collect();
    let redundant: Vec<DirectoryMapping> = vcs
        .directory_mappings()
        .into_iter()
        .filter(|mapping| content_roots.contains(mapping.directory.as_str()))
        .collect();

    vcs.set_auto_directory_mapping(PROJECT_DIRECTORY, &name);
    for mapping in &redundant {
        vcs.remove_directory_mapping(mapping);
    }
    vcs.cleanup_mappings();

    DetectionOutcome::ProjectWide {
        vcs: name,
        removed: redundant.len(),
    }
}

/// Map each root of `module` whose versioning VCS differs from the mapped one.
/// Returns the number of mappings set.
pub fn auto_detect_module_vcs_mapping<V>(module: &Module, vcs: &mut V) -> usize
where
    V: VcsManager + ?Sized,
{
    let mut mapped = 0;
    for root in &module.content_roots {
        if let Some(found) = vcs.find_versioning_vcs(root)
            && vcs.vcs_for(root).as_ref() != Some(&found)
        {
            vcs.set_auto_directory_mapping(root, &found);
            mapped += 1;
        }
    }
    if mapped > 0 {
        vcs.cleanup_mappings();
    }
    mapped
}

/// The first mapping for each content root of `module`, tagged with the
/// module name.
pub fn mappings_for_module<V>(module: &Module, vcs: &V) -> Vec<(String, DirectoryMapping)>
where
    V: VcsManager + ?Sized,
{
    let mappings = vcs.directory_mappings();
    module
        .content_roots
        .iter()
        .filter_map(|root| mappings.iter().find(|mapping| mapping.covers(root)))
        .map(|mapping| (module.name.clone(), mapping.clone()))
        .collect()
}
