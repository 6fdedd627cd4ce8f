use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use asciify_codec::{convert, layout};
use asciify_core::config::ConvertConfig;
use asciify_core::traits::Source;
use asciify_source::image::{ImageSource, save_grayscale};

/// Encode the image at `input` and write the text to `out`.
///
/// The image is resampled when the resolved resolution differs from its
/// native size.
///
/// # Errors
/// Returns an error if the image cannot be loaded or resized, the codec
/// rejects the parameters, or writing fails.
pub fn run_encode<W: Write>(input: &Path, config: &ConvertConfig, out: &mut W) -> Result<()> {
    config.validate()?;
    let mut source = ImageSource::new(input)?;
    let resolution = layout::resolve_for_encode(config.resolution, source.native_size())?;
    let grid = source.grid(resolution)?;

    let text = convert::asciify(&grid, config)?;
    out.write_all(text.as_bytes())
        .context("Impossible d'écrire l'art ASCII")?;
    out.flush().context("Impossible d'écrire l'art ASCII")?;
    log::info!(
        "{} encodée en {resolution} (coef={}, espaces={})",
        input.display(),
        config.coefficient,
        config.spaces
    );
    Ok(())
}

/// Decode the text file at `input` and save the image to `output`.
///
/// # Errors
/// Returns an error if the text cannot be read, the codec rejects it, or
/// the image cannot be written.
pub fn run_decode(input: &Path, output: &Path, config: &ConvertConfig) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Impossible de lire {}", input.display()))?;
    let grid = convert::deasciify(&text, config)
        .with_context(|| format!("Art ASCII illisible dans {}", input.display()))?;
    save_grayscale(&grid, output)?;
    log::info!(
        "{} décodé en {}x{} -> {}",
        input.display(),
        grid.width(),
        grid.height(),
        output.display()
    );
    Ok(())
}
