use std::path::Path;

use anyhow::{Context, Result};
use asciify_core::grid::{PixelGrid, Resolution};
use asciify_core::traits::Source;
use image::GrayImage;

use crate::resize::Resizer;

/// Source d'image statique, convertie en luminance 8 bits au chargement.
///
/// # Example
/// ```no_run
/// use asciify_source::image::ImageSource;
/// use std::path::Path;
/// let source = ImageSource::new(Path::new("test.png")).unwrap();
/// ```
pub struct ImageSource {
    grid: PixelGrid,
    resizer: Resizer,
}

impl ImageSource {
    /// Load an image from disk and create a source.
    ///
    /// # Errors
    /// Returns an error if the image cannot be loaded.
    pub fn new(path: &Path) -> Result<Self> {
        let grid = load_grayscale(path)?;
        Ok(Self::from_grid(grid))
    }

    /// Wrap an already decoded grid.
    #[must_use]
    pub fn from_grid(grid: PixelGrid) -> Self {
        Self {
            grid,
            resizer: Resizer::new(),
        }
    }
}

impl Source for ImageSource {
    fn native_size(&self) -> Resolution {
        self.grid.resolution()
    }

    fn grid(&mut self, target: Resolution) -> Result<PixelGrid> {
        self.resizer.resize(&self.grid, target)
    }
}

/// Open any supported image and convert it to a grayscale grid.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
pub fn load_grayscale(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    log::info!("Image chargée : {} ({width}x{height})", path.display());
    PixelGrid::new(width, height, luma.into_raw())
        .with_context(|| format!("Image vide : {}", path.display()))
}

/// Write a grid as a single-channel image; the format follows the extension.
///
/// # Errors
/// Returns an error if the grid is empty or the file cannot be written.
///
/// # Example
/// ```no_run
/// use asciify_core::grid::PixelGrid;
/// use asciify_source::image::save_grayscale;
/// use std::path::Path;
/// let grid = PixelGrid::new(2, 1, vec![0, 255]).unwrap();
/// save_grayscale(&grid, Path::new("out.png")).unwrap();
/// ```
pub fn save_grayscale(grid: &PixelGrid, path: &Path) -> Result<()> {
    if grid.is_empty() {
        anyhow::bail!("Grille vide, rien à écrire dans {}", path.display());
    }
    let img = GrayImage::from_raw(grid.width(), grid.height(), grid.samples().to_vec())
        .context("Tampon de pixels incohérent avec les dimensions")?;
    img.save(path)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!(
        "Image écrite : {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}
