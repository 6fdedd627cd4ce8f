use asciify_core::config::ConvertConfig;
use asciify_core::error::CodecError;
use asciify_core::grid::{PixelGrid, TextBlock};

use crate::decode::decode;
use crate::encode::encode;
use crate::layout::resolve_for_decode;

/// Grid → newline-terminated text, using `config.coefficient` and `config.spaces`.
///
/// # Errors
/// Any [`CodecError`] raised by [`encode`] or [`ConvertConfig::validate`].
///
/// # Example
/// ```
/// use asciify_core::config::ConvertConfig;
/// use asciify_core::grid::PixelGrid;
/// use asciify_codec::convert::asciify;
///
/// let grid = PixelGrid::new(2, 1, vec![0, 255]).unwrap();
/// let text = asciify(&grid, &ConvertConfig::default()).unwrap();
/// assert_eq!(text, "$.\n");
/// ```
pub fn asciify(grid: &PixelGrid, config: &ConvertConfig) -> Result<String, CodecError> {
    config.validate()?;
    let block = encode(grid, config.coefficient, &config.ramp())?;
    let mut text = String::with_capacity(
        block.row_count() * (grid.width() as usize * config.coefficient as usize + 1),
    );
    for row in block.rows() {
        text.push_str(row);
        text.push('\n');
    }
    Ok(text)
}

/// Text → grid, inferring the resolution unless `config.resolution` is set.
///
/// # Errors
/// Any [`CodecError`] raised by layout resolution or [`decode`].
///
/// # Example
/// ```
/// use asciify_core::config::ConvertConfig;
/// use asciify_codec::convert::deasciify;
///
/// let config = ConvertConfig { coefficient: 2, ..ConvertConfig::default() };
/// let grid = deasciify("$$..\n..$$\n", &config).unwrap();
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// ```
pub fn deasciify(text: &str, config: &ConvertConfig) -> Result<PixelGrid, CodecError> {
    config.validate()?;
    let block = TextBlock::parse(text);
    let resolution = resolve_for_decode(config.resolution, &block, config.coefficient)?;
    decode(&block, resolution, config.coefficient, &config.ramp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciify_core::grid::Resolution;

    #[test]
    fn text_round_trip_keeps_geometry() {
        let config = ConvertConfig {
            coefficient: 2,
            spaces: true,
            resolution: None,
        };
        let grid = PixelGrid::new(3, 2, vec![255, 0, 255, 10, 255, 255]).unwrap();
        let text = asciify(&grid, &config).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.chars().count() == 6));
        let back = deasciify(&text, &config).unwrap();
        assert_eq!(back.resolution(), Resolution::new(3, 2));
        assert_eq!(asciify(&back, &config).unwrap(), text);
    }

    #[test]
    fn explicit_resolution_overrides_inference() {
        let config = ConvertConfig {
            resolution: Some(Resolution::new(2, 2)),
            ..ConvertConfig::default()
        };
        let grid = deasciify("$..$\n", &config).unwrap();
        assert_eq!(grid.resolution(), Resolution::new(2, 2));
        assert_eq!(grid.sample(0, 1), 252);
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(matches!(
            deasciify("@@\n@@@\n", &ConvertConfig::default()),
            Err(CodecError::MalformedTextBlock { .. })
        ));
    }

    #[test]
    fn zero_coefficient_is_rejected_before_work() {
        let config = ConvertConfig {
            coefficient: 0,
            ..ConvertConfig::default()
        };
        assert_eq!(
            deasciify("$$\n", &config),
            Err(CodecError::InvalidCoefficient(0))
        );
    }
}
