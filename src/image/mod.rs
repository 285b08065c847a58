//! Grayscale image views and file I/O used by the demos.
//!
//! The detector itself works on [`Grid`](crate::grid::Grid); `ImageU8` is the
//! borrowed row-major view that [`Grid::from_image`](crate::grid::Grid::from_image)
//! adapts, and [`io`] covers PNG/JPEG, raw volumes and JSON reports.

pub mod io;
pub mod traits;
pub mod u8;

pub use self::traits::ImageView;
pub use self::u8::ImageU8;
