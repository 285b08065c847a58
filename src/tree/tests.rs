use super::*;
use crate::grid::{Connectivity, Grid, Polarity};

fn block_5x5() -> Vec<u8> {
    let mut data = vec![0u8; 25];
    for y in 1..4 {
        for x in 1..4 {
            data[y * 5 + x] = 200;
        }
    }
    data
}

fn noise(w: usize, h: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..w * h)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 16) as u8 * 16
        })
        .collect()
}

#[test]
fn bright_block_forms_one_node_below_the_background() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::BrightOnDark);

    assert_eq!(tree.len(), 2);
    let block = tree.node(NodeId(0));
    assert_eq!(block.level, 55);
    assert_eq!(block.size, 9);
    assert_eq!(block.representative, 6);
    assert_eq!(block.parent, Some(NodeId(1)));

    let root = tree.node(NodeId(1));
    assert_eq!(root.level, 255);
    assert_eq!(root.size, 25);
    assert_eq!(root.representative, 0);
    assert_eq!(root.main_child, Some(NodeId(0)));
    assert_eq!(tree.roots(), &[NodeId(1)]);
    assert_eq!(tree.leaf_count(), 1);
}

#[test]
fn dark_polarity_sees_the_background_first() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::DarkOnBright);

    // The background ring is one component at level 0.
    assert_eq!(tree.node(NodeId(0)).size, 16);
    assert_eq!(tree.node(NodeId(0)).level, 0);
    assert_eq!(tree.node(NodeId(1)).size, 25);
    assert_eq!(tree.node(NodeId(1)).level, 200);
}

#[test]
fn plateau_is_one_node_regardless_of_scan_order() {
    let data = vec![7u8; 12];
    let grid = Grid::new(&data, [4, 3], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::DarkOnBright);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.node(NodeId(0)).size, 12);
    assert_eq!(tree.node(NodeId(0)).representative, 0);
}

#[test]
fn saddle_merges_two_basins_into_one_parent() {
    let data = vec![0u8, 5, 0];
    let grid = Grid::new(&data, [3, 1], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::DarkOnBright);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.node(NodeId(0)).representative, 0);
    assert_eq!(tree.node(NodeId(1)).representative, 2);
    let top = tree.node(NodeId(2));
    assert_eq!(top.size, 3);
    assert_eq!(top.level, 5);
    assert_eq!(top.main_child, Some(NodeId(0)), "equal sizes prefer the lower id");
    assert_eq!(tree.node(NodeId(1)).parent, Some(NodeId(2)));
    assert!(tree.is_ancestor(NodeId(2), NodeId(1)));
    assert!(!tree.is_ancestor(NodeId(0), NodeId(1)));
}

#[test]
fn wide_saddle_plateau_becomes_a_single_parent() {
    let data = vec![0u8, 5, 5, 0];
    let grid = Grid::new(&data, [4, 1], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::DarkOnBright);

    assert_eq!(tree.len(), 3);
    let top = tree.node(NodeId(2));
    assert_eq!(top.level, 5);
    assert_eq!(top.size, 4);
    assert_eq!(top.representative, 1);
    assert_eq!(tree.node(NodeId(0)).parent, Some(NodeId(2)));
    assert_eq!(tree.node(NodeId(1)).parent, Some(NodeId(2)));
    assert_eq!(tree.roots(), &[NodeId(2)]);
}

#[test]
fn disconnected_grid_keeps_one_root_per_piece() {
    let data = vec![1u8, 2, 3, 4];
    let rows_only = Connectivity::<2>::from_offsets(&[vec![1, 0], vec![-1, 0]]).unwrap();
    let grid = Grid::new(&data, [2, 2], rows_only).unwrap();
    let tree = ErTree::build(&grid, Polarity::DarkOnBright);
    assert_eq!(tree.roots().len(), 2);
    let total: usize = tree.roots().iter().map(|&r| tree.node(r).size).sum();
    assert_eq!(total, 4);
}

#[test]
fn size_at_walks_both_directions() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::BrightOnDark);
    let block = NodeId(0);
    let root = NodeId(1);
    assert_eq!(tree.size_at(block, 55), 9);
    assert_eq!(tree.size_at(block, 60), 9);
    assert_eq!(tree.size_at(block, 255), 25);
    assert_eq!(tree.size_at(block, 50), 0);
    assert_eq!(tree.size_at(root, 100), 9);
    assert_eq!(tree.size_at(root, 54), 0);
}

#[test]
fn random_grids_respect_tree_invariants() {
    for (seed, conn) in [(1u32, Connectivity::four()), (99, Connectivity::eight())] {
        let (w, h) = (23, 17);
        let data = noise(w, h, seed);
        let grid = Grid::new(&data, [w, h], conn).unwrap();
        for polarity in [Polarity::BrightOnDark, Polarity::DarkOnBright] {
            let tree = ErTree::build(&grid, polarity);
            let total: usize = tree.roots().iter().map(|&r| tree.node(r).size).sum();
            assert_eq!(total, w * h);
            for (i, node) in tree.nodes().iter().enumerate() {
                assert_eq!(grid.level(node.representative, polarity), node.level);
                if let Some(parent) = node.parent {
                    let parent = tree.node(parent);
                    assert!(parent.level > node.level, "node {i} level not below parent");
                    assert!(parent.size > node.size, "node {i} size not below parent");
                }
                if let Some(child) = node.main_child {
                    assert_eq!(tree.node(child).parent, Some(NodeId(i as u32)));
                }
            }
        }
    }
}
