use asciify_core::charset::SymbolRamp;
use asciify_core::error::CodecError;
use asciify_core::grid::{PixelGrid, Resolution, TextBlock};

/// Decode text rows back into a grid of `resolution`.
///
/// Row boundaries are dropped, then one symbol out of every `coefficient`
/// is kept (starting with the first) and mapped to the representative
/// brightness of its ramp bucket.
///
/// `coefficient` must be the one used to encode; the codec cannot detect
/// a mismatch beyond the sample count check.
///
/// # Errors
/// - [`CodecError::InvalidCoefficient`] if `coefficient == 0`
/// - [`CodecError::InvalidLayout`] if `resolution` has a zero side
/// - [`CodecError::MalformedTextBlock`] if rows differ in length
/// - [`CodecError::UnknownSymbol`] for a character outside `ramp`
/// - [`CodecError::LayoutMismatch`] if the kept symbols do not fill `resolution` exactly
///
/// # Example
/// ```
/// use asciify_core::charset::SymbolRamp;
/// use asciify_core::grid::{Resolution, TextBlock};
/// use asciify_codec::decode::decode;
///
/// let block = TextBlock::parse("$$..\n..$$\n");
/// let grid = decode(&block, Resolution::new(2, 2), 2, &SymbolRamp::canonical(false)).unwrap();
/// assert_eq!(grid.sample(0, 0), 0);
/// assert!(grid.sample(1, 0) > 240);
/// ```
pub fn decode(
    block: &TextBlock,
    resolution: Resolution,
    coefficient: u32,
    ramp: &SymbolRamp,
) -> Result<PixelGrid, CodecError> {
    if coefficient == 0 {
        return Err(CodecError::InvalidCoefficient(coefficient));
    }
    let resolution = resolution.validate()?;
    let row_width = block.row_width()?;

    let stride = coefficient as usize;
    if row_width % stride != 0 {
        log::warn!(
            "decode: largeur de ligne {row_width} non multiple du coefficient {coefficient}"
        );
    }

    let samples = decode_symbols(block.symbols(), stride, ramp)?;
    let expected = resolution.area();
    if samples.len() != expected {
        return Err(CodecError::LayoutMismatch {
            expected,
            found: samples.len(),
        });
    }

    log::debug!(
        "decode: {} lignes coef={coefficient} rampe={} -> {resolution}",
        block.row_count(),
        ramp.len()
    );
    PixelGrid::new(resolution.width, resolution.height, samples)
}

/// Stride-sample a symbol stream and map each kept symbol to brightness.
///
/// # Errors
/// [`CodecError::UnknownSymbol`] with the position in the stream of the
/// first character not in `ramp`.
///
/// # Example
/// ```
/// use asciify_core::charset::SymbolRamp;
/// use asciify_codec::decode::decode_symbols;
///
/// let ramp = SymbolRamp::new("@#+.", false).unwrap();
/// let samples = decode_symbols("@@..".chars(), 2, &ramp).unwrap();
/// assert_eq!(samples, vec![0, 192]);
/// ```
pub fn decode_symbols<I>(
    symbols: I,
    stride: usize,
    ramp: &SymbolRamp,
) -> Result<Vec<u8>, CodecError>
where
    I: IntoIterator<Item = char>,
{
    let stride = stride.max(1);
    symbols
        .into_iter()
        .enumerate()
        .step_by(stride)
        .map(|(position, symbol)| {
            ramp.unmap(symbol)
                .ok_or(CodecError::UnknownSymbol { symbol, position })
        })
        .collect()
}
