/// Geometry of a row-major image with an explicit stride.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// Rows follow each other without padding.
    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }
}
