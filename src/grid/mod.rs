//! Dense N-dimensional intensity grid with a fixed connectivity.
//!
//! The grid is a borrowed, read-only view: the detector and the fill pass
//! share it freely across threads. Elements are addressed by a linear index in
//! which axis 0 varies fastest, so a 2D `(w, h)` image maps to
//! `index = y * w + x` and a 3D `(w, h, d)` volume to
//! `index = (z * h + y) * w + x`.
//!
//! Neighbor enumeration filters out-of-range offsets itself, so traversal
//! never produces an out-of-bounds index. Only explicit coordinate/index
//! conversions report [`MserError::OutOfBounds`].

mod connectivity;
mod intensity;

pub use connectivity::Connectivity;
pub use intensity::{Intensity, Polarity};

use crate::error::MserError;
use crate::image::{ImageU8, ImageView};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Identity of a grid, stamped on every region handle it produces.
///
/// Two grids share a tag only when they view the same buffer with the same
/// shape, connectivity and contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridTag {
    buffer: usize,
    elements: usize,
    layout: u64,
    content: u64,
}

/// Read-only view over a dense intensity array.
#[derive(Clone, Debug)]
pub struct Grid<'a, T: Intensity, const D: usize> {
    data: &'a [T],
    shape: [usize; D],
    strides: [usize; D],
    connectivity: Connectivity<D>,
    deltas: Vec<isize>,
    tag: GridTag,
}

impl<'a, T: Intensity, const D: usize> Grid<'a, T, D> {
    /// Wrap `data` with the given per-axis extents (axis 0 fastest).
    pub fn new(
        data: &'a [T],
        shape: [usize; D],
        connectivity: Connectivity<D>,
    ) -> Result<Self, MserError> {
        if D == 0 {
            return Err(MserError::config("grid needs at least one axis"));
        }
        let elements = shape.iter().product::<usize>();
        if elements == 0 {
            return Err(MserError::EmptyGrid);
        }
        if elements >= u32::MAX as usize {
            return Err(MserError::config(format!(
                "grid of {elements} elements exceeds the 32-bit index space"
            )));
        }
        if data.len() != elements {
            return Err(MserError::ShapeMismatch {
                expected: elements,
                found: data.len(),
            });
        }
        if connectivity.is_empty() {
            return Err(MserError::config("connectivity has no offsets"));
        }

        let mut strides = [0usize; D];
        let mut acc = 1usize;
        for (stride, &extent) in strides.iter_mut().zip(shape.iter()) {
            *stride = acc;
            acc *= extent;
        }
        let deltas = connectivity
            .offsets()
            .iter()
            .map(|offset| {
                offset
                    .iter()
                    .zip(strides.iter())
                    .map(|(&o, &s)| o * s as isize)
                    .sum()
            })
            .collect();

        let mut hasher = DefaultHasher::new();
        shape.hash(&mut hasher);
        connectivity.offsets().hash(&mut hasher);
        let layout = hasher.finish();
        let mut hasher = DefaultHasher::new();
        for &value in data {
            hasher.write_u32(value.to_level());
        }
        let tag = GridTag {
            buffer: data.as_ptr() as usize,
            elements,
            layout,
            content: hasher.finish(),
        };

        Ok(Self {
            data,
            shape,
            strides,
            connectivity,
            deltas,
            tag,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dimension_count(&self) -> usize {
        D
    }

    pub fn shape(&self) -> [usize; D] {
        self.shape
    }

    pub fn connectivity(&self) -> &Connectivity<D> {
        &self.connectivity
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn tag(&self) -> GridTag {
        self.tag
    }

    /// Raw intensity at `index`. Panics when `index >= len()`; see
    /// [`Grid::try_intensity`] for the checked form.
    #[inline]
    pub fn intensity(&self, index: usize) -> T {
        self.data[index]
    }

    /// Ordering level of the element at `index` under `polarity`.
    /// Panics when `index >= len()`; see [`Grid::try_level`].
    #[inline]
    pub fn level(&self, index: usize, polarity: Polarity) -> u32 {
        polarity.level(self.data[index])
    }

    pub fn try_intensity(&self, index: usize) -> Result<T, MserError> {
        self.check(index)?;
        Ok(self.data[index])
    }

    pub fn try_level(&self, index: usize, polarity: Polarity) -> Result<u32, MserError> {
        Ok(polarity.level(self.try_intensity(index)?))
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.data.len()
    }

    /// Coordinates of a linear index.
    pub fn coords(&self, index: usize) -> Result<[usize; D], MserError> {
        self.check(index)?;
        Ok(self.coords_of(index))
    }

    /// Linear index of a coordinate tuple.
    pub fn index_of(&self, coords: [usize; D]) -> Result<usize, MserError> {
        let mut index = 0usize;
        for axis in 0..D {
            if coords[axis] >= self.shape[axis] {
                return Err(MserError::OutOfBounds {
                    index: coords[axis],
                    len: self.shape[axis],
                });
            }
            index += coords[axis] * self.strides[axis];
        }
        Ok(index)
    }

    /// Valid neighbors of `index` in connectivity order.
    pub fn neighbors(&self, index: usize) -> Result<Neighbors<'_, D>, MserError> {
        self.check(index)?;
        Ok(self.neighbors_of(index))
    }

    /// Neighbor iterator without the bounds check on `index` itself.
    #[inline]
    pub(crate) fn neighbors_of(&self, index: usize) -> Neighbors<'_, D> {
        Neighbors {
            index,
            coords: self.coords_of(index),
            shape: &self.shape,
            offsets: self.connectivity.offsets(),
            deltas: &self.deltas,
            next: 0,
        }
    }

    #[inline]
    fn coords_of(&self, index: usize) -> [usize; D] {
        let mut coords = [0usize; D];
        let mut rest = index;
        for (c, &extent) in coords.iter_mut().zip(self.shape.iter()) {
            *c = rest % extent;
            rest /= extent;
        }
        coords
    }

    fn check(&self, index: usize) -> Result<(), MserError> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(MserError::OutOfBounds {
                index,
                len: self.data.len(),
            })
        }
    }
}

impl<'a> Grid<'a, u8, 2> {
    /// Adapt a contiguous 8-bit image view as a 2D grid.
    pub fn from_image(image: &ImageU8<'a>, connectivity: Connectivity<2>) -> Result<Self, MserError> {
        if !image.is_contiguous() {
            return Err(MserError::config(
                "image rows must be contiguous (stride == width)",
            ));
        }
        let shape = [image.width(), image.height()];
        let data = image.as_slice().ok_or(MserError::ShapeMismatch {
            expected: shape[0] * shape[1],
            found: image.data.len(),
        })?;
        Grid::new(data, shape, connectivity)
    }
}

/// Lazy, bounds-checked neighbor enumeration.
pub struct Neighbors<'g, const D: usize> {
    index: usize,
    coords: [usize; D],
    shape: &'g [usize; D],
    offsets: &'g [[isize; D]],
    deltas: &'g [isize],
    next: usize,
}

impl<const D: usize> Iterator for Neighbors<'_, D> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.next < self.offsets.len() {
            let k = self.next;
            self.next += 1;
            let offset = &self.offsets[k];
            let inside = (0..D).all(|axis| {
                let c = self.coords[axis] as isize + offset[axis];
                c >= 0 && (c as usize) < self.shape[axis]
            });
            if inside {
                return Some((self.index as isize + self.deltas[k]) as usize);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len() - self.next))
    }
}
