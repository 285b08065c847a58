/// Axis-aligned box painted into a grid: `origin`, `extent`, `value`.
pub struct Block<const D: usize> {
    pub origin: [usize; D],
    pub extent: [usize; D],
    pub value: u8,
}

/// Paints `blocks` in order over a constant `background` (axis 0 fastest).
pub fn blocks_u8<const D: usize>(shape: [usize; D], background: u8, blocks: &[Block<D>]) -> Vec<u8> {
    assert!(shape.iter().all(|&s| s > 0), "grid extents must be positive");
    let len: usize = shape.iter().product();
    let mut data = vec![background; len];
    for index in 0..len {
        let coords = unravel(index, shape);
        for block in blocks {
            let inside = (0..D).all(|axis| {
                coords[axis] >= block.origin[axis]
                    && coords[axis] < block.origin[axis] + block.extent[axis]
            });
            if inside {
                data[index] = block.value;
            }
        }
    }
    data
}

/// Linear indices covered by `block`, ascending.
pub fn block_indices<const D: usize>(shape: [usize; D], block: &Block<D>) -> Vec<usize> {
    let len: usize = shape.iter().product();
    (0..len)
        .filter(|&index| {
            let coords = unravel(index, shape);
            (0..D).all(|axis| {
                coords[axis] >= block.origin[axis]
                    && coords[axis] < block.origin[axis] + block.extent[axis]
            })
        })
        .collect()
}

pub fn unravel<const D: usize>(index: usize, shape: [usize; D]) -> [usize; D] {
    let mut coords = [0usize; D];
    let mut rest = index;
    for axis in 0..D {
        coords[axis] = rest % shape[axis];
        rest /= shape[axis];
    }
    coords
}

/// Quantized xorshift noise; `levels` distinct values spread over 0..=255.
pub fn noise_u8(len: usize, levels: u32, seed: u32) -> Vec<u8> {
    assert!((2..=256).contains(&levels), "levels must lie in 2..=256");
    let step = 255 / (levels - 1);
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            ((state % levels) * step) as u8
        })
        .collect()
}
