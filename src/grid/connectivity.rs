use crate::error::MserError;

/// Neighbor offsets defining adjacency on a `D`-dimensional grid.
///
/// Offsets are unit steps (`{-1, 0, 1}` per axis), never zero, and closed
/// under negation so that adjacency is symmetric. The order is fixed:
/// lexicographic with the last axis most significant, which for 8-connectivity
/// reads `(-1,-1), (0,-1), (1,-1), (-1,0), (1,0), (-1,1), (0,1), (1,1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connectivity<const D: usize> {
    offsets: Vec<[isize; D]>,
}

impl<const D: usize> Connectivity<D> {
    /// Face neighbors only (4 in 2D, 6 in 3D).
    pub fn face() -> Self {
        Self::with_max_l1(1)
    }

    /// Every element of the surrounding `3^D` block (8 in 2D, 26 in 3D).
    pub fn full() -> Self {
        Self::with_max_l1(D)
    }

    /// Unit offsets whose L1 norm is at most `max_l1`.
    pub fn with_max_l1(max_l1: usize) -> Self {
        let total = 3usize.pow(D as u32);
        let mut offsets = Vec::new();
        for code in 0..total {
            let mut offset = [0isize; D];
            let mut rest = code;
            for axis in offset.iter_mut() {
                *axis = (rest % 3) as isize - 1;
                rest /= 3;
            }
            let l1: usize = offset.iter().map(|v| v.unsigned_abs()).sum();
            if l1 > 0 && l1 <= max_l1 {
                offsets.push(offset);
            }
        }
        Self { offsets }
    }

    /// Build a descriptor from caller-provided offsets.
    pub fn from_offsets(offsets: &[Vec<isize>]) -> Result<Self, MserError> {
        if offsets.is_empty() {
            return Err(MserError::config("connectivity needs at least one offset"));
        }
        let mut parsed: Vec<[isize; D]> = Vec::with_capacity(offsets.len());
        for raw in offsets {
            if raw.len() != D {
                return Err(MserError::DimensionMismatch {
                    expected: D,
                    found: raw.len(),
                });
            }
            let mut offset = [0isize; D];
            for (dst, &v) in offset.iter_mut().zip(raw) {
                if !(-1..=1).contains(&v) {
                    return Err(MserError::config(format!(
                        "offset {raw:?} is not a unit step"
                    )));
                }
                *dst = v;
            }
            if offset.iter().all(|&v| v == 0) {
                return Err(MserError::config("zero offset in connectivity"));
            }
            if parsed.contains(&offset) {
                return Err(MserError::config(format!("duplicate offset {raw:?}")));
            }
            parsed.push(offset);
        }
        for offset in &parsed {
            let mirrored = offset.map(|v| -v);
            if !parsed.contains(&mirrored) {
                return Err(MserError::config(format!(
                    "connectivity is not symmetric: {offset:?} has no mirror"
                )));
            }
        }
        Ok(Self { offsets: parsed })
    }

    pub fn offsets(&self) -> &[[isize; D]] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Connectivity<2> {
    pub fn four() -> Self {
        Self::with_max_l1(1)
    }

    pub fn eight() -> Self {
        Self::with_max_l1(2)
    }
}

impl Connectivity<3> {
    pub fn six() -> Self {
        Self::with_max_l1(1)
    }

    pub fn eighteen() -> Self {
        Self::with_max_l1(2)
    }

    pub fn twenty_six() -> Self {
        Self::with_max_l1(3)
    }
}
