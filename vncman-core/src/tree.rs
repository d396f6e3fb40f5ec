//! Display-side view of the configuration tree.
//!
//! The view is an arena of nodes referring to each other by index, rebuilt in
//! full from the canonical `Vec<Branch>` after every structural change.
//! Records are referenced by index path rather than by pointer, so the view
//! holds no cycles and owns nothing.

use sitetree::Branch;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Branch,
    Plant,
    Device,
}

/// Index path into the canonical root collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Branch(usize),
    Plant(usize, usize),
    Device(usize, usize, usize),
}

/// Decorative status dot shown next to a device row. Derived from the device
/// name's hash so it is stable across rebuilds; it is not a connectivity
/// probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Online,
    Warning,
    Offline,
}

const STATUS_PALETTE: &[StatusColor] = &[StatusColor::Online];

pub fn device_status(name: &str) -> StatusColor {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    STATUS_PALETTE[(hasher.finish() % STATUS_PALETTE.len() as u64) as usize]
}

#[derive(Debug, Clone)]
pub struct DisplayNode {
    pub kind: NodeKind,
    pub record: NodeRef,
    pub label: String,
    /// `ip:port` for device nodes, absent otherwise.
    pub connection_info: Option<String>,
    pub status: Option<StatusColor>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub expanded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TreeView {
    pub nodes: Vec<DisplayNode>,
    pub roots: Vec<usize>,
}

impl TreeView {
    /// Full rebuild from the canonical collection. All nodes start collapsed;
    /// the orchestrator reapplies any expansion snapshot afterwards.
    pub fn build(branches: &[Branch]) -> Self {
        let mut view = TreeView::default();
        for (b, branch) in branches.iter().enumerate() {
            let branch_id = view.push(DisplayNode {
                kind: NodeKind::Branch,
                record: NodeRef::Branch(b),
                label: branch.name.clone(),
                connection_info: None,
                status: None,
                parent: None,
                children: Vec::new(),
                expanded: false,
            });
            view.roots.push(branch_id);
            for (p, plant) in branch.plants.iter().enumerate() {
                let plant_id = view.push(DisplayNode {
                    kind: NodeKind::Plant,
                    record: NodeRef::Plant(b, p),
                    label: plant.name.clone(),
                    connection_info: None,
                    status: None,
                    parent: Some(branch_id),
                    children: Vec::new(),
                    expanded: false,
                });
                view.nodes[branch_id].children.push(plant_id);
                for (d, device) in plant.devices.iter().enumerate() {
                    let device_id = view.push(DisplayNode {
                        kind: NodeKind::Device,
                        record: NodeRef::Device(b, p, d),
                        label: device.name.clone(),
                        connection_info: Some(device.endpoint()),
                        status: Some(device_status(&device.name)),
                        parent: Some(plant_id),
                        children: Vec::new(),
                        expanded: false,
                    });
                    view.nodes[plant_id].children.push(device_id);
                }
            }
        }
        view
    }

    fn push(&mut self, node: DisplayNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn find(&self, record: NodeRef) -> Option<usize> {
        self.nodes.iter().position(|n| n.record == record)
    }

    /// Ancestor indices of `id`, nearest parent first.
    pub fn ancestors(&self, id: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut current = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            out.push(parent);
            current = self.nodes[parent].parent;
        }
        out
    }

    /// Records the expand/collapse flag of `id` and all of its ancestors, so
    /// the exact flags can be reapplied after a rebuild.
    pub fn snapshot_expansion(&self, id: usize) -> Vec<(NodeRef, bool)> {
        let Some(node) = self.nodes.get(id) else {
            return Vec::new();
        };
        let mut states = vec![(node.record, node.expanded)];
        for ancestor in self.ancestors(id) {
            states.push((self.nodes[ancestor].record, self.nodes[ancestor].expanded));
        }
        states
    }

    pub fn restore_expansion(&mut self, states: &[(NodeRef, bool)]) {
        for (record, expanded) in states {
            if let Some(id) = self.find(*record) {
                self.nodes[id].expanded = *expanded;
            }
        }
    }
}
