use vncman_core::config::sample_branches;
use vncman_core::tree::{device_status, NodeKind, NodeRef, TreeView};

#[test]
fn build_mirrors_collection_order() {
    let branches = sample_branches();
    let view = TreeView::build(&branches);

    assert_eq!(view.roots.len(), branches.len());
    let first = &view.nodes[view.roots[0]];
    assert_eq!(first.kind, NodeKind::Branch);
    assert_eq!(first.label, branches[0].name);
    assert_eq!(first.children.len(), branches[0].plants.len());

    // Depth is fixed at three levels: devices have no children.
    for node in &view.nodes {
        if node.kind == NodeKind::Device {
            assert!(node.children.is_empty());
        }
    }
}

#[test]
fn device_nodes_carry_endpoint_and_status() {
    let branches = sample_branches();
    let view = TreeView::build(&branches);

    let id = view.find(NodeRef::Device(0, 0, 0)).expect("device node");
    let node = &view.nodes[id];
    assert_eq!(node.connection_info.as_deref(), Some("192.168.1.100:5900"));
    assert!(node.status.is_some());

    // Branch and plant rows have neither.
    let branch = view.find(NodeRef::Branch(0)).expect("branch node");
    assert_eq!(view.nodes[branch].connection_info, None);
    assert_eq!(view.nodes[branch].status, None);
}

#[test]
fn status_is_stable_for_a_name() {
    assert_eq!(device_status("Server Room PC"), device_status("Server Room PC"));
}

#[test]
fn nodes_start_collapsed() {
    let view = TreeView::build(&sample_branches());
    assert!(view.nodes.iter().all(|n| !n.expanded));
}

#[test]
fn ancestors_walk_to_the_root() {
    let view = TreeView::build(&sample_branches());
    let device = view.find(NodeRef::Device(0, 0, 1)).expect("device");

    let ancestors = view.ancestors(device);
    assert_eq!(ancestors.len(), 2);
    assert_eq!(view.nodes[ancestors[0]].record, NodeRef::Plant(0, 0));
    assert_eq!(view.nodes[ancestors[1]].record, NodeRef::Branch(0));
}

#[test]
fn snapshot_and_restore_expansion() {
    let branches = sample_branches();
    let mut view = TreeView::build(&branches);

    let plant = view.find(NodeRef::Plant(0, 0)).expect("plant");
    let branch = view.find(NodeRef::Branch(0)).expect("branch");
    view.nodes[plant].expanded = true;
    view.nodes[branch].expanded = true;

    let device = view.find(NodeRef::Device(0, 0, 0)).expect("device");
    let states = view.snapshot_expansion(device);

    let mut rebuilt = TreeView::build(&branches);
    rebuilt.restore_expansion(&states);

    assert!(rebuilt.nodes[rebuilt.find(NodeRef::Plant(0, 0)).unwrap()].expanded);
    assert!(rebuilt.nodes[rebuilt.find(NodeRef::Branch(0)).unwrap()].expanded);
    assert!(!rebuilt.nodes[rebuilt.find(NodeRef::Branch(1)).unwrap()].expanded);
}
