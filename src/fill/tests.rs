use super::*;
use crate::detector::{MserDetector, MserParams};
use crate::grid::Connectivity;

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
            (state % 8) as u8 * 32
        })
        .collect()
}

#[test]
fn block_region_fills_to_its_nine_elements() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let regions = MserDetector::default().detect(&grid).unwrap();
    assert_eq!(regions.len(), 1);

    let members = fill(&grid, &regions[0]).unwrap();
    assert_eq!(members[0], regions[0].representative);
    let mut sorted = members.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);
}

#[test]
fn fill_is_repeatable() {
    let data = noise(16, 12, 7);
    let grid = Grid::new(&data, [16, 12], Connectivity::eight()).unwrap();
    let params = MserParams::default().with_delta(1).with_min_diversity(0.0);
    let regions = MserDetector::new(params).detect(&grid).unwrap();
    for region in &regions {
        assert_eq!(fill(&grid, region).unwrap(), fill(&grid, region).unwrap());
    }
}

#[test]
fn filled_sets_are_maximal_components_below_the_level() {
    let data = noise(20, 15, 3);
    let grid = Grid::new(&data, [20, 15], Connectivity::four()).unwrap();
    let params = MserParams::default().with_delta(1).with_min_diversity(0.0);
    for polarity in [Polarity::BrightOnDark, Polarity::DarkOnBright] {
        let regions = MserDetector::new(params.with_polarity(polarity))
            .detect(&grid)
            .unwrap();
        for (region, members) in regions.iter().zip(fill_all(&grid, &regions).unwrap()) {
            assert_eq!(members.len(), region.size);
            let mut inside = vec![false; grid.len()];
            for &m in &members {
                assert!(grid.level(m, polarity) <= region.level);
                inside[m] = true;
            }
            for &m in &members {
                for n in grid.neighbors(m).unwrap() {
                    assert!(inside[n] || grid.level(n, polarity) > region.level);
                }
            }
        }
    }
}

#[test]
fn seed_above_level_yields_empty_set() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    // Background has level 255 under bright-on-dark.
    let members = fill_from_seed(&grid, 0, 100, Polarity::BrightOnDark).unwrap();
    assert!(members.is_empty());

    let members = fill_from_seed(&grid, 0, 0, Polarity::DarkOnBright).unwrap();
    assert_eq!(members.len(), 16);
}

#[test]
fn seed_outside_grid_is_rejected() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    assert_eq!(
        fill_from_seed(&grid, 25, 255, Polarity::BrightOnDark),
        Err(MserError::OutOfBounds { index: 25, len: 25 })
    );
}

#[test]
fn handle_from_another_grid_is_rejected() {
    let data = block_5x5();
    let copy = data.clone();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let other = Grid::new(&copy, [5, 5], Connectivity::four()).unwrap();
    let regions = MserDetector::default().detect(&grid).unwrap();

    assert!(matches!(
        fill(&other, &regions[0]),
        Err(MserError::InvalidHandle { .. })
    ));

    let eight = Grid::new(&data, [5, 5], Connectivity::eight()).unwrap();
    assert!(matches!(
        fill(&eight, &regions[0]),
        Err(MserError::InvalidHandle { .. })
    ));
}

#[test]
fn handle_is_rejected_after_the_buffer_is_rewritten() {
    let mut data = block_5x5();
    let region = {
        let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
        MserDetector::default().detect(&grid).unwrap().remove(0)
    };
    // Same buffer and layout; one background element joins the block.
    data[5] = 200;
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    assert!(matches!(
        fill(&grid, &region),
        Err(MserError::InvalidHandle { .. })
    ));
}

#[test]
fn handle_with_a_wrong_size_is_rejected() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let mut region = MserDetector::default().detect(&grid).unwrap().remove(0);
    region.size += 1;
    assert!(matches!(
        fill(&grid, &region),
        Err(MserError::InvalidHandle { .. })
    ));
}

#[test]
fn deserialized_handle_carries_no_grid_identity() {
    let data = block_5x5();
    let grid = Grid::new(&data, [5, 5], Connectivity::four()).unwrap();
    let regions = MserDetector::default().detect(&grid).unwrap();
    let json = serde_json::to_string(&regions[0]).unwrap();
    let restored: SelectedRegion = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.representative, regions[0].representative);
    assert!(matches!(
        fill(&grid, &restored),
        Err(MserError::InvalidHandle { .. })
    ));
}

#[test]
fn membership_counts_add_up_per_handle() {
    // Two separate bright 3x3 squares on a dark 9x9 background.
    let mut data = vec![0u8; 81];
    for y in 1..4 {
        for (x0, value) in [(1, 200u8), (5, 180u8)] {
            for x in x0..x0 + 3 {
                data[y * 9 + x] = value;
            }
        }
    }
    let grid = Grid::new(&data, [9, 9], Connectivity::four()).unwrap();
    let regions = MserDetector::default().detect(&grid).unwrap();
    assert_eq!(regions.len(), 2);

    let mut handles = regions.clone();
    handles.push(regions[0].clone());
    let counts = membership_counts(&grid, &handles).unwrap();
    let first = regions[0].representative;
    let second = regions[1].representative;
    assert_eq!(counts[first], 2);
    assert_eq!(counts[second], 1);
    assert_eq!(counts[0], 0);
    assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), 27);
}
