use asciify_core::error::CodecError;
use asciify_core::grid::{Resolution, TextBlock};

/// Fix the grid size for encoding.
///
/// An explicit resolution wins; otherwise the source keeps its native size.
///
/// # Errors
/// [`CodecError::InvalidLayout`] if the chosen resolution has a zero side.
///
/// # Example
/// ```
/// use asciify_core::grid::Resolution;
/// use asciify_codec::layout::resolve_for_encode;
///
/// let native = Resolution::new(640, 480);
/// assert_eq!(resolve_for_encode(None, native).unwrap(), native);
/// let explicit = Resolution::new(80, 40);
/// assert_eq!(resolve_for_encode(Some(explicit), native).unwrap(), explicit);
/// ```
pub fn resolve_for_encode(
    explicit: Option<Resolution>,
    source: Resolution,
) -> Result<Resolution, CodecError> {
    let resolution = explicit.unwrap_or(source).validate()?;
    log::debug!("layout encode: {resolution} (natif {source})");
    Ok(resolution)
}

/// Fix the grid size for decoding.
///
/// Without an explicit resolution the geometry comes from the block
/// itself: `width = row length / coefficient` (rounded down) and
/// `height = row count`.
///
/// # Errors
/// - [`CodecError::InvalidCoefficient`] if `coefficient == 0`
/// - [`CodecError::MalformedTextBlock`] if rows differ in length
/// - [`CodecError::InvalidLayout`] if the result has a zero side
///
/// # Example
/// ```
/// use asciify_core::grid::TextBlock;
/// use asciify_codec::layout::resolve_for_decode;
///
/// let block = TextBlock::parse("$$..\n..$$\n");
/// let res = resolve_for_decode(None, &block, 2).unwrap();
/// assert_eq!((res.width, res.height), (2, 2));
/// ```
pub fn resolve_for_decode(
    explicit: Option<Resolution>,
    block: &TextBlock,
    coefficient: u32,
) -> Result<Resolution, CodecError> {
    if coefficient == 0 {
        return Err(CodecError::InvalidCoefficient(coefficient));
    }
    if let Some(res) = explicit {
        return res.validate();
    }

    let row_width = block.row_width()?;
    let width = u32::try_from(row_width / coefficient as usize).unwrap_or(u32::MAX);
    let height = u32::try_from(block.row_count()).unwrap_or(u32::MAX);
    let resolution = Resolution::new(width, height).validate()?;
    log::debug!("layout decode déduit: {resolution} (ligne de {row_width} symboles)");
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use asciify_core::charset::SymbolRamp;
    use asciify_core::grid::PixelGrid;

    #[test]
    fn explicit_resolution_wins_on_decode() {
        let block = TextBlock::from_rows(["$$$$"]);
        let explicit = Resolution::new(1, 4);
        assert_eq!(
            resolve_for_decode(Some(explicit), &block, 1).unwrap(),
            explicit
        );
    }

    #[test]
    fn explicit_zero_is_rejected() {
        assert!(matches!(
            resolve_for_encode(Some(Resolution::new(0, 3)), Resolution::new(5, 5)),
            Err(CodecError::InvalidLayout { .. })
        ));
        assert!(matches!(
            resolve_for_encode(None, Resolution::new(5, 0)),
            Err(CodecError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn infers_with_floor_division() {
        let block = TextBlock::from_rows(["$$$$$", "$$$$$"]);
        assert_eq!(
            resolve_for_decode(None, &block, 2).unwrap(),
            Resolution::new(2, 2)
        );
    }

    #[test]
    fn empty_block_cannot_be_inferred() {
        assert!(matches!(
            resolve_for_decode(None, &TextBlock::new(), 1),
            Err(CodecError::InvalidLayout {
                width: 0,
                height: 0
            })
        ));
    }

    #[test]
    fn row_shorter_than_coefficient_is_invalid() {
        let block = TextBlock::from_rows(["$"]);
        assert!(matches!(
            resolve_for_decode(None, &block, 2),
            Err(CodecError::InvalidLayout { width: 0, .. })
        ));
    }

    #[test]
    fn malformed_block_is_rejected() {
        let block = TextBlock::from_rows(["@@", "@@@"]);
        assert!(matches!(
            resolve_for_decode(None, &block, 1),
            Err(CodecError::MalformedTextBlock { .. })
        ));
    }

    #[test]
    fn rejects_zero_coefficient() {
        let block = TextBlock::from_rows(["$$"]);
        assert_eq!(
            resolve_for_decode(None, &block, 0),
            Err(CodecError::InvalidCoefficient(0))
        );
    }

    #[test]
    fn recovers_encoded_dimensions() {
        let ramp = SymbolRamp::canonical(true);
        for (w, h) in [(1, 1), (2, 2), (5, 3), (9, 1)] {
            let grid = PixelGrid::new(w, h, vec![128; (w * h) as usize]).unwrap();
            for c in 1..=4 {
                let block = encode(&grid, c, &ramp).unwrap();
                assert_eq!(
                    resolve_for_decode(None, &block, c).unwrap(),
                    Resolution::new(w, h)
                );
            }
        }
    }
}
