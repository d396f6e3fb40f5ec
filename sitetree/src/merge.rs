//! Key-based reconciliation of an imported tree into the current one.
//!
//! Three-level upsert with append-new / skip-duplicate-key semantics: branches
//! and plants match by exact name, devices by `(ip, port)`. Nothing is ever
//! deleted or overwritten, so merging a collection into itself is a no-op.

use crate::{Branch, Plant};

pub fn merge_branches(current: &mut Vec<Branch>, incoming: Vec<Branch>) {
    for branch in incoming {
        match current.iter_mut().find(|b| b.name == branch.name) {
            None => current.push(branch),
            Some(existing) => merge_plants(existing, branch.plants),
        }
    }
}

fn merge_plants(branch: &mut Branch, incoming: Vec<Plant>) {
    for plant in incoming {
        match branch.plants.iter_mut().find(|p| p.name == plant.name) {
            None => branch.plants.push(plant),
            Some(existing) => {
                for device in plant.devices {
                    let known = existing.devices.iter().any(|d| d.same_endpoint(&device));
                    if !known {
                        existing.devices.push(device);
                    }
                }
            }
        }
    }
}

/// Total number of devices across the whole tree.
pub fn device_count(branches: &[Branch]) -> usize {
    branches
        .iter()
        .flat_map(|b| &b.plants)
        .map(|p| p.devices.len())
        .sum()
}
