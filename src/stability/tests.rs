use super::*;
use crate::grid::{Connectivity, Grid, Polarity};
use crate::tree::ErTree;

fn row_tree(values: &[u8]) -> (Vec<u8>, ErTree) {
    let data = values.to_vec();
    let tree = {
        let grid = Grid::new(&data, [data.len(), 1], Connectivity::four()).unwrap();
        ErTree::build(&grid, Polarity::DarkOnBright)
    };
    (data, tree)
}

fn open_filter() -> CandidateFilter {
    CandidateFilter {
        min_size: 1,
        max_size: usize::MAX,
        max_variation: None,
    }
}

#[test]
fn isolated_block_scores_against_empty_lower_window() {
    let mut data = vec![0u8; 25];
    for y in 1..4 {
        for x in 1..4 {
            data[y * 5 + x] = 200;
        }
    }
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::BrightOnDark);
    let scores = score_tree(&tree, 5);
    assert_eq!(scores, vec![Some(1.0), None]);

    let selection = select_candidates(&tree, &scores, &open_filter());
    assert_eq!(selection.candidates.len(), 1);
    assert_eq!(selection.candidates[0].node, NodeId(0));
    assert_eq!(selection.candidates[0].size, 9);

    let strict = CandidateFilter {
        max_variation: Some(0.5),
        ..open_filter()
    };
    let selection = select_candidates(&tree, &scores, &strict);
    assert!(selection.candidates.is_empty());
    assert_eq!(selection.rejected_variation, 1);
}

#[test]
fn plateau_between_jumps_is_the_stable_level() {
    // Prefix components: sizes 1, 2, 8, 9, 18 at levels 0..=40.
    let mut values = vec![0u8, 10];
    values.extend([20u8; 6]);
    values.push(30);
    values.extend([40u8; 9]);
    let (_data, tree) = row_tree(&values);
    assert_eq!(tree.len(), 5);

    let scores = score_tree(&tree, 10);
    assert_eq!(scores[0], None);
    assert_eq!(scores[1], Some(3.5));
    assert_eq!(scores[2], Some(0.875));
    assert_eq!(scores[4], Some(0.5));

    let selection = select_candidates(&tree, &scores, &open_filter());
    assert_eq!(selection.local_minima, 2);
    let nodes: Vec<NodeId> = selection.candidates.iter().map(|c| c.node).collect();
    assert_eq!(nodes, vec![NodeId(2), NodeId(4)]);

    let bounded = CandidateFilter {
        max_size: 10,
        ..open_filter()
    };
    let selection = select_candidates(&tree, &scores, &bounded);
    assert_eq!(selection.rejected_size, 1);
    assert_eq!(selection.candidates.len(), 1);
    assert_eq!(selection.candidates[0].node, NodeId(2));
    assert_eq!(selection.candidates[0].size, 8);
}

#[test]
fn window_must_fit_inside_level_domain() {
    let (_data, tree) = row_tree(&[250, 252]);
    // Grows from 1 to 2 elements inside [245, 255].
    assert_eq!(score_node(&tree, NodeId(0), 5), Some(2.0));
    assert_eq!(score_node(&tree, NodeId(1), 5), None);
    assert_eq!(score_node(&tree, NodeId(0), 251), None);
}

#[test]
fn equal_scores_prefer_the_node_nearer_the_leaves() {
    let (_data, tree) = row_tree(&[0, 10, 20, 30]);
    let scores = vec![None, Some(0.5), Some(0.5), Some(0.9)];
    let selection = select_candidates(&tree, &scores, &open_filter());
    let nodes: Vec<NodeId> = selection.candidates.iter().map(|c| c.node).collect();
    assert_eq!(nodes, vec![NodeId(1)]);
}

#[test]
fn uniform_grid_has_a_single_whole_grid_minimum() {
    let data = vec![5u8; 100];
    let grid = Grid::new(&data, [10, 10], Connectivity::four()).unwrap();
    let tree = ErTree::build(&grid, Polarity::BrightOnDark);
    let scores = score_tree(&tree, 5);
    let filter = CandidateFilter {
        min_size: 3,
        max_size: 75,
        max_variation: None,
    };
    let selection = select_candidates(&tree, &scores, &filter);
    assert_eq!(selection.local_minima, 1);
    assert!(selection.candidates.is_empty());
}
