use anyhow::{Context, Result};
use asciify_core::grid::{PixelGrid, Resolution};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize, pour grilles mono-canal.
///
/// # Example
/// ```
/// use asciify_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source samples (the resize API needs `&mut`).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resample `src` to `target`.
    ///
    /// Returns a copy when the sizes already match.
    ///
    /// # Errors
    /// Returns an error if either grid is empty or the resize fails.
    ///
    /// # Example
    /// ```
    /// use asciify_source::resize::Resizer;
    /// use asciify_core::grid::{PixelGrid, Resolution};
    /// let mut r = Resizer::new();
    /// let src = PixelGrid::new(100, 100, vec![128; 100 * 100]).unwrap();
    /// let dst = r.resize(&src, Resolution::new(50, 25)).unwrap();
    /// assert_eq!((dst.width(), dst.height()), (50, 25));
    /// ```
    pub fn resize(&mut self, src: &PixelGrid, target: Resolution) -> Result<PixelGrid> {
        if src.resolution() == target {
            return Ok(src.clone());
        }
        let target = target.validate()?;
        if src.is_empty() {
            anyhow::bail!("Impossible de redimensionner une grille vide");
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(src.samples());

        let src_image = Image::from_slice_u8(
            src.width(),
            src.height(),
            &mut self.src_buf,
            PixelType::U8,
        )
        .context("Dimensions source invalides")?;

        let mut dst_buf = vec![0u8; target.area()];
        let mut dst_image =
            Image::from_slice_u8(target.width, target.height, &mut dst_buf, PixelType::U8)
                .context("Dimensions destination invalides")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Échec du redimensionnement")?;

        log::debug!("resize {} -> {target}", src.resolution());
        Ok(PixelGrid::new(target.width, target.height, dst_buf)?)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
pub fn resize_grid(src: &PixelGrid, target: Resolution) -> Result<PixelGrid> {
    Resizer::new().resize(src, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_is_a_copy() {
        let src = PixelGrid::new(3, 1, vec![1, 2, 3]).unwrap();
        let dst = resize_grid(&src, Resolution::new(3, 1)).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn flat_grid_stays_flat() {
        let src = PixelGrid::new(8, 8, vec![200; 64]).unwrap();
        let dst = resize_grid(&src, Resolution::new(3, 5)).unwrap();
        assert_eq!(dst.samples().len(), 15);
        assert!(dst.samples().iter().all(|&s| s.abs_diff(200) <= 1));
    }

    #[test]
    fn zero_target_fails() {
        let src = PixelGrid::new(2, 2, vec![0; 4]).unwrap();
        assert!(resize_grid(&src, Resolution::new(0, 2)).is_err());
    }
}
