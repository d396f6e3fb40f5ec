//! CRUD orchestration over the configuration tree.
//!
//! All mutations go through [`ConfigManager`]: it validates input, edits the
//! canonical `Vec<Branch>`, persists, and rebuilds the display view while
//! preserving the expansion state of the edited node and its ancestors.

use crate::config::io::load_or_bootstrap;
use crate::tree::{NodeRef, TreeView};
use crate::validation::{validate_device_fields, validate_name, DeviceFields, ValidationError};
use sitetree::{
    device_count, load_branches, merge_branches, save_branches, Branch, Device, Plant,
};
use std::path::{Path, PathBuf};

/// Affirmative confirmation signal for destructive operations. The UI shows
/// the confirmation dialog; the orchestrator refuses to delete without this
/// token from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
}

#[derive(thiserror::Error, Debug)]
pub enum CrudError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Import source could not be read or parsed; nothing was changed.
    #[error("{0}")]
    Load(String),
    /// Save failed after the in-memory mutation was applied. Memory stays the
    /// source of truth for the session; `dirty` remains set for a retry.
    #[error("{0}")]
    Persistence(String),
    #[error("node no longer exists in the configuration tree")]
    MissingNode,
}

pub struct ConfigManager {
    pub branches: Vec<Branch>,
    pub config_path: PathBuf,
    pub view: TreeView,
    /// Set while the in-memory tree is ahead of the file on disk.
    pub dirty: bool,
}

impl ConfigManager {
    pub fn with_path(path: PathBuf) -> Self {
        let branches = load_or_bootstrap(&path);
        let view = TreeView::build(&branches);
        Self {
            branches,
            config_path: path,
            view,
            dirty: false,
        }
    }

    /// Re-reads the configuration file and rebuilds the view from scratch.
    pub fn reload(&mut self) {
        self.branches = load_or_bootstrap(&self.config_path);
        self.view = TreeView::build(&self.branches);
        self.dirty = false;
    }

    /// Points the manager at a different data file and reloads from it.
    pub fn set_config_path(&mut self, path: PathBuf) {
        self.config_path = path;
        self.reload();
    }

    fn after_mutation(&mut self, focus: Option<NodeRef>) -> Result<(), CrudError> {
        let states = focus
            .and_then(|record| self.view.find(record))
            .map(|id| self.view.snapshot_expansion(id))
            .unwrap_or_default();
        self.view = TreeView::build(&self.branches);
        self.view.restore_expansion(&states);
        self.dirty = true;
        match save_branches(&self.config_path, &self.branches) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => Err(CrudError::Persistence(format!(
                "Failed to save configuration to '{}': {err}",
                self.config_path.display()
            ))),
        }
    }

    /// Retries persisting the current in-memory tree after a failed save.
    pub fn retry_save(&mut self) -> Result<(), CrudError> {
        save_branches(&self.config_path, &self.branches).map_err(|err| {
            CrudError::Persistence(format!(
                "Failed to save configuration to '{}': {err}",
                self.config_path.display()
            ))
        })?;
        self.dirty = false;
        Ok(())
    }

    pub fn add_branch(&mut self, name: &str) -> Result<(), CrudError> {
        let name = validate_name(name)?;
        self.branches.push(Branch::named(name));
        self.after_mutation(None)
    }

    pub fn edit_branch(&mut self, branch: usize, name: &str) -> Result<(), CrudError> {
        let name = validate_name(name)?;
        let target = self.branches.get_mut(branch).ok_or(CrudError::MissingNode)?;
        target.name = name;
        self.after_mutation(Some(NodeRef::Branch(branch)))
    }

    pub fn add_plant(&mut self, branch: usize, name: &str) -> Result<(), CrudError> {
        let name = validate_name(name)?;
        let target = self.branches.get_mut(branch).ok_or(CrudError::MissingNode)?;
        target.plants.push(Plant::named(name));
        self.after_mutation(Some(NodeRef::Branch(branch)))
    }

    pub fn edit_plant(&mut self, branch: usize, plant: usize, name: &str) -> Result<(), CrudError> {
        let name = validate_name(name)?;
        let target = self
            .branches
            .get_mut(branch)
            .and_then(|b| b.plants.get_mut(plant))
            .ok_or(CrudError::MissingNode)?;
        target.name = name;
        self.after_mutation(Some(NodeRef::Plant(branch, plant)))
    }

    pub fn add_device(
        &mut self,
        branch: usize,
        plant: usize,
        fields: &DeviceFields,
    ) -> Result<(), CrudError> {
        let device = validate_device_fields(fields)?;
        let target = self
            .branches
            .get_mut(branch)
            .and_then(|b| b.plants.get_mut(plant))
            .ok_or(CrudError::MissingNode)?;
        target.devices.push(device);
        self.after_mutation(Some(NodeRef::Plant(branch, plant)))
    }

    /// Re-validates the fields, moves the device when the destination plant
    /// differs from its current parent, and applies the field update. A moved
    /// device leaves its source plant before joining the destination.
    pub fn edit_device(
        &mut self,
        location: (usize, usize, usize),
        fields: &DeviceFields,
        destination: (usize, usize),
    ) -> Result<(), CrudError> {
        let device = validate_device_fields(fields)?;
        let (b, p, d) = location;
        if self
            .branches
            .get(b)
            .and_then(|br| br.plants.get(p))
            .and_then(|pl| pl.devices.get(d))
            .is_none()
        {
            return Err(CrudError::MissingNode);
        }
        if destination == (b, p) {
            self.branches[b].plants[p].devices[d] = device;
        } else {
            let (db, dp) = destination;
            if self
                .branches
                .get(db)
                .and_then(|br| br.plants.get(dp))
                .is_none()
            {
                return Err(CrudError::MissingNode);
            }
            self.branches[b].plants[p].devices.remove(d);
            self.branches[db].plants[dp].devices.push(device);
        }
        self.after_mutation(Some(NodeRef::Device(b, p, d)))
    }

    pub fn delete_branch(&mut self, branch: usize, _confirm: Confirm) -> Result<(), CrudError> {
        if branch >= self.branches.len() {
            return Err(CrudError::MissingNode);
        }
        self.branches.remove(branch);
        self.after_mutation(None)
    }

    pub fn delete_plant(
        &mut self,
        branch: usize,
        plant: usize,
        _confirm: Confirm,
    ) -> Result<(), CrudError> {
        let target = self.branches.get_mut(branch).ok_or(CrudError::MissingNode)?;
        if plant >= target.plants.len() {
            return Err(CrudError::MissingNode);
        }
        target.plants.remove(plant);
        self.after_mutation(Some(NodeRef::Branch(branch)))
    }

    pub fn delete_device(
        &mut self,
        branch: usize,
        plant: usize,
        device: usize,
        _confirm: Confirm,
    ) -> Result<(), CrudError> {
        let target = self
            .branches
            .get_mut(branch)
            .and_then(|b| b.plants.get_mut(plant))
            .ok_or(CrudError::MissingNode)?;
        if device >= target.devices.len() {
            return Err(CrudError::MissingNode);
        }
        target.devices.remove(device);
        self.after_mutation(Some(NodeRef::Plant(branch, plant)))
    }

    /// Merges an external JSON tree into the current one (append-new,
    /// skip-duplicate-endpoint) and persists the result. Returns the number of
    /// devices gained.
    pub fn import_merge(&mut self, source: &Path) -> Result<usize, CrudError> {
        let incoming = load_branches(source).map_err(|err| {
            CrudError::Load(format!(
                "Failed to read import file '{}': {err}",
                source.display()
            ))
        })?;
        let before = device_count(&self.branches);
        merge_branches(&mut self.branches, incoming);
        let added = device_count(&self.branches) - before;
        self.after_mutation(None)?;
        Ok(added)
    }

    /// Writes the current tree to `dest` without touching the working file.
    pub fn export_to(&self, dest: &Path) -> Result<(), CrudError> {
        save_branches(dest, &self.branches).map_err(|err| {
            CrudError::Persistence(format!(
                "Failed to export configuration to '{}': {err}",
                dest.display()
            ))
        })
    }

    pub fn toggle_expanded(&mut self, node: usize) {
        if let Some(n) = self.view.nodes.get_mut(node) {
            n.expanded = !n.expanded;
        }
    }

    pub fn branch_at(&self, branch: usize) -> Option<&Branch> {
        self.branches.get(branch)
    }

    pub fn plant_at(&self, branch: usize, plant: usize) -> Option<&Plant> {
        self.branches.get(branch).and_then(|b| b.plants.get(plant))
    }

    pub fn device_at(&self, branch: usize, plant: usize, device: usize) -> Option<&Device> {
        self.plant_at(branch, plant)
            .and_then(|p| p.devices.get(device))
    }

    pub fn device_total(&self) -> usize {
        device_count(&self.branches)
    }
}
