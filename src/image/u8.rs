use super::traits::ImageView;

/// Borrowed 8-bit grayscale image.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Elements between the starts of consecutive rows.
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data` (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// The visible pixels as one slice, if rows carry no padding and the
    /// buffer covers `w * h` elements.
    pub fn as_slice(&self) -> Option<&'a [u8]> {
        let data: &'a [u8] = self.data;
        self.is_contiguous()
            .then(|| data.get(..self.w * self.h))
            .flatten()
    }
}

impl ImageView for ImageU8<'_> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
}
