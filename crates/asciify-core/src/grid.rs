use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CodecError, CoreError};

/// Grid dimensions in pixels, written `WIDTHxHEIGHT`.
///
/// # Example
/// ```
/// use asciify_core::grid::Resolution;
/// let r: Resolution = "80x40".parse().unwrap();
/// assert_eq!((r.width, r.height), (80, 40));
/// assert_eq!(r.to_string(), "80x40");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// width × height.
    #[inline]
    #[must_use]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject zero dimensions.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidLayout`] if width or height is 0.
    pub fn validate(self) -> Result<Self, CodecError> {
        if self.width == 0 || self.height == 0 {
            return Err(CodecError::InvalidLayout {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidResolution(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Grayscale pixel grid, one brightness byte per pixel, row-major.
///
/// # Example
/// ```
/// use asciify_core::grid::PixelGrid;
/// let grid = PixelGrid::new(2, 2, vec![0, 255, 255, 0]).unwrap();
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.sample(1, 0), 255);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    samples: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// Wrap `samples` as a `width × height` grid.
    ///
    /// A grid of height 0 (no samples) is valid; width 0 is not.
    ///
    /// # Errors
    /// [`CodecError::InvalidLayout`] for width 0,
    /// [`CodecError::LayoutMismatch`] if the sample count is not `width × height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, CodecError> {
        if width == 0 {
            return Err(CodecError::InvalidLayout { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(CodecError::LayoutMismatch {
                expected,
                found: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    /// Wrap `samples` using `width` and derive the height.
    ///
    /// # Errors
    /// [`CodecError::InvalidLayout`] for width 0,
    /// [`CodecError::LayoutMismatch`] if the sample count is not a multiple of `width`.
    pub fn from_samples(width: u32, samples: Vec<u8>) -> Result<Self, CodecError> {
        if width == 0 {
            return Err(CodecError::InvalidLayout { width, height: 0 });
        }
        let w = width as usize;
        if samples.len() % w != 0 {
            return Err(CodecError::LayoutMismatch {
                expected: samples.len().next_multiple_of(w),
                found: samples.len(),
            });
        }
        let height = u32::try_from(samples.len() / w).map_err(|_| CodecError::InvalidLayout {
            width,
            height: u32::MAX,
        })?;
        Self::new(width, height, samples)
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Raw samples, row-major.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.samples[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over pixel rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.width as usize)
    }
}

/// Texte ASCII : lignes de symboles, sans séparateurs.
///
/// Rows are not required to share a length at construction time; the
/// decoder and layout resolver check that through [`TextBlock::row_width`].
///
/// # Example
/// ```
/// use asciify_core::grid::TextBlock;
/// let block = TextBlock::parse("$$..\n..$$\n");
/// assert_eq!(block.row_count(), 2);
/// assert_eq!(block.row_width().unwrap(), 4);
/// assert_eq!(block.to_string(), "$$..\n..$$");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    rows: Vec<String>,
}

impl TextBlock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already split rows.
    #[must_use]
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Split text into rows on `\n`.
    ///
    /// A single trailing newline is a terminator, not an empty last row.
    /// `\r\n` endings are accepted. Trailing spaces are data and kept.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text
                .lines()
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect(),
        }
    }

    pub fn push_row(&mut self, row: String) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Common row length in characters (0 for an empty block).
    ///
    /// # Errors
    /// Returns [`CodecError::MalformedTextBlock`] at the first row whose
    /// length differs from the first row's.
    pub fn row_width(&self) -> Result<usize, CodecError> {
        let Some(first) = self.rows.first() else {
            return Ok(0);
        };
        let expected = first.chars().count();
        for (row, line) in self.rows.iter().enumerate().skip(1) {
            let found = line.chars().count();
            if found != expected {
                return Err(CodecError::MalformedTextBlock {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(expected)
    }

    /// All symbols in order, row boundaries dropped.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flat_map(|row| row.chars())
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_parse_accepts_both_separators() {
        assert_eq!("10x20".parse::<Resolution>().unwrap(), Resolution::new(10, 20));
        assert_eq!(" 3X4 ".parse::<Resolution>().unwrap(), Resolution::new(3, 4));
    }

    #[test]
    fn resolution_parse_rejects_garbage() {
        for bad in ["", "10", "x10", "10x", "-1x2", "axb", "1x2x3"] {
            assert!(bad.parse::<Resolution>().is_err(), "{bad:?} accepté");
        }
    }

    #[test]
    fn resolution_validate_rejects_zero() {
        assert_eq!(
            Resolution::new(0, 4).validate(),
            Err(CodecError::InvalidLayout { width: 0, height: 4 })
        );
        assert!(Resolution::new(1, 1).validate().is_ok());
    }

    #[test]
    fn pixel_grid_rejects_bad_shapes() {
        assert!(matches!(
            PixelGrid::new(0, 0, vec![]),
            Err(CodecError::InvalidLayout { .. })
        ));
        assert_eq!(
            PixelGrid::new(2, 2, vec![0; 3]),
            Err(CodecError::LayoutMismatch {
                expected: 4,
                found: 3
            })
        );
        assert!(matches!(
            PixelGrid::from_samples(2, vec![0; 5]),
            Err(CodecError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn pixel_grid_from_samples_derives_height() {
        let grid = PixelGrid::from_samples(3, vec![0; 6]).unwrap();
        assert_eq!(grid.resolution(), Resolution::new(3, 2));
        assert_eq!(grid.rows().count(), 2);
        assert!(PixelGrid::from_samples(3, vec![]).unwrap().is_empty());
    }

    #[test]
    fn text_block_parse_keeps_trailing_spaces() {
        let block = TextBlock::parse("$ \r\n. \n");
        assert_eq!(block.rows(), &["$ ".to_string(), ". ".to_string()]);
    }

    #[test]
    fn text_block_unequal_rows_are_malformed() {
        let block = TextBlock::from_rows(["@@", "@@@"]);
        assert_eq!(
            block.row_width(),
            Err(CodecError::MalformedTextBlock {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn text_block_counts_chars_not_bytes() {
        let block = TextBlock::from_rows(["é.", "$$"]);
        assert_eq!(block.row_width().unwrap(), 2);
    }
}
