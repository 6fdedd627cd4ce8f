use anyhow::Result;

use crate::grid::{PixelGrid, Resolution};

/// Fournit une grille de luminance au codec.
///
/// Implémenté par : `ImageSource`.
///
/// # Example
/// ```
/// use asciify_core::traits::Source;
/// use asciify_core::grid::{PixelGrid, Resolution};
///
/// struct Flat(u8);
/// impl Source for Flat {
///     fn native_size(&self) -> Resolution { Resolution::new(2, 1) }
///     fn grid(&mut self, target: Resolution) -> anyhow::Result<PixelGrid> {
///         Ok(PixelGrid::new(target.width, target.height, vec![self.0; target.area()])?)
///     }
/// }
///
/// let mut src = Flat(7);
/// let grid = src.grid(src.native_size()).unwrap();
/// assert_eq!(grid.samples(), &[7, 7]);
/// ```
pub trait Source {
    /// Dimensions natives de la source (avant resize).
    fn native_size(&self) -> Resolution;

    /// Produce a single-channel grid at `target` resolution, resampling if
    /// it differs from [`Source::native_size`].
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or resampled.
    fn grid(&mut self, target: Resolution) -> Result<PixelGrid>;
}
