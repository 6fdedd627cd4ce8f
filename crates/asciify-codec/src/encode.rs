use asciify_core::charset::SymbolRamp;
use asciify_core::error::CodecError;
use asciify_core::grid::{PixelGrid, TextBlock};

/// Encode a grid into text rows, one row per pixel row.
///
/// Each sample is quantized to a ramp symbol which is written
/// `coefficient` times in a row, so every output row holds
/// `width × coefficient` characters.
///
/// # Errors
/// Returns [`CodecError::InvalidCoefficient`] if `coefficient == 0`.
///
/// # Example
/// ```
/// use asciify_core::charset::SymbolRamp;
/// use asciify_core::grid::PixelGrid;
/// use asciify_codec::encode::encode;
///
/// let grid = PixelGrid::new(2, 2, vec![0, 255, 255, 0]).unwrap();
/// let block = encode(&grid, 2, &SymbolRamp::canonical(false)).unwrap();
/// assert_eq!(block.rows(), &["$$..", "..$$"]);
/// ```
pub fn encode(
    grid: &PixelGrid,
    coefficient: u32,
    ramp: &SymbolRamp,
) -> Result<TextBlock, CodecError> {
    if coefficient == 0 {
        return Err(CodecError::InvalidCoefficient(coefficient));
    }

    let stretch = coefficient as usize;
    let row_len = grid.width() as usize * stretch;
    let mut block = TextBlock::new();

    for pixels in grid.rows() {
        let mut row = String::with_capacity(row_len);
        for &sample in pixels {
            let ch = ramp.map(sample);
            row.extend(std::iter::repeat_n(ch, stretch));
        }
        block.push_row(row);
    }

    log::debug!(
        "encode: {}x{} coef={coefficient} rampe={} -> {} lignes",
        grid.width(),
        grid.height(),
        ramp.len(),
        block.row_count()
    );
    Ok(block)
}

/// Encode a flat sample buffer of row width `width`.
///
/// # Errors
/// [`CodecError::InvalidLayout`] if `width == 0`,
/// [`CodecError::LayoutMismatch`] if `samples.len()` is not a multiple of `width`,
/// [`CodecError::InvalidCoefficient`] if `coefficient == 0`.
///
/// # Example
/// ```
/// use asciify_core::charset::SymbolRamp;
/// use asciify_codec::encode::encode_samples;
///
/// let ramp = SymbolRamp::new("@#+.", false).unwrap();
/// let block = encode_samples(&[0, 85, 170, 255], 4, 1, &ramp).unwrap();
/// assert_eq!(block.to_string(), "@#+.");
/// ```
pub fn encode_samples(
    samples: &[u8],
    width: u32,
    coefficient: u32,
    ramp: &SymbolRamp,
) -> Result<TextBlock, CodecError> {
    let grid = PixelGrid::from_samples(width, samples.to_vec())?;
    encode(&grid, coefficient, ramp)
}
