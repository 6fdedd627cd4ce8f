use crate::error::CodecError;

/// 69 caractères — rampe Paul Bourke, du plus dense au plus clair.
///
/// The optional space glyph is not part of the constant; see
/// [`SymbolRamp::canonical`].
pub const CHARSET_CANONICAL: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.";

/// Glyph appended as the lightest symbol when spaces are enabled.
pub const SPACE: char = ' ';

/// Map a brightness sample to a ramp index.
///
/// Linear scale into `[0, ramp_size)`, clamped to the last index so that
/// `255` lands on `ramp_size - 1`.
///
/// # Example
/// ```
/// use asciify_core::charset::quantize;
/// assert_eq!(quantize(0, 4), 0);
/// assert_eq!(quantize(85, 4), 1);
/// assert_eq!(quantize(255, 4), 3);
/// ```
#[inline(always)]
#[must_use]
pub fn quantize(sample: u8, ramp_size: usize) -> usize {
    debug_assert!(ramp_size >= 1, "empty ramp");
    (usize::from(sample) * ramp_size / 255).min(ramp_size.saturating_sub(1))
}

/// Map a ramp index back to the representative brightness of its bucket.
///
/// The representative is the smallest sample that [`quantize`] sends to
/// `index`, i.e. `index × 255 / ramp_size` rounded up. Re-quantizing it
/// always yields `index` again.
///
/// # Example
/// ```
/// use asciify_core::charset::{dequantize, quantize};
/// assert_eq!(dequantize(0, 70), 0);
/// let s = dequantize(1, 70);
/// assert_eq!(quantize(s, 70), 1);
/// ```
#[inline(always)]
#[must_use]
pub fn dequantize(index: usize, ramp_size: usize) -> u8 {
    debug_assert!(index < ramp_size, "index out of ramp");
    (index * 255).div_ceil(ramp_size).min(255) as u8
}

/// Ordered alphabet of density symbols, darkest first.
///
/// Immutable once built. Shared by reference between encode and decode.
///
/// # Example
/// ```
/// use asciify_core::charset::SymbolRamp;
/// let ramp = SymbolRamp::canonical(false);
/// assert_eq!(ramp.len(), 69);
/// assert_eq!(ramp.symbol(0), '$');
/// assert_eq!(SymbolRamp::canonical(true).symbol(69), ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRamp {
    symbols: Vec<char>,
    spaces: bool,
}

impl SymbolRamp {
    /// Build a ramp from `symbols` (darkest first), appending a space when
    /// `spaces` is set.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidRamp`] if the resulting alphabet has
    /// fewer than 2 symbols or contains duplicates.
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::SymbolRamp;
    /// let ramp = SymbolRamp::new("@#+.", false).unwrap();
    /// assert_eq!(ramp.len(), 4);
    /// assert!(SymbolRamp::new("@", false).is_err());
    /// assert!(SymbolRamp::new("@@.", false).is_err());
    /// ```
    pub fn new(symbols: &str, spaces: bool) -> Result<Self, CodecError> {
        let mut chars: Vec<char> = symbols.chars().collect();
        if spaces {
            chars.push(SPACE);
        }
        if chars.len() < 2 {
            return Err(CodecError::InvalidRamp(format!(
                "{} symbole(s), 2 minimum",
                chars.len()
            )));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(CodecError::InvalidRamp(format!("symbole {c:?} en double")));
            }
        }
        Ok(Self {
            symbols: chars,
            spaces,
        })
    }

    /// The canonical ramp, with or without the trailing space glyph.
    #[must_use]
    pub fn canonical(spaces: bool) -> Self {
        let mut symbols: Vec<char> = CHARSET_CANONICAL.chars().collect();
        if spaces {
            symbols.push(SPACE);
        }
        Self { symbols, spaces }
    }

    /// Number of symbols in the active alphabet.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: a ramp holds at least 2 symbols.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether the space glyph is part of the alphabet.
    #[must_use]
    pub fn has_spaces(&self) -> bool {
        self.spaces
    }

    /// Symbols in order, darkest first.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline(always)]
    #[must_use]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Position of `symbol` in the ramp, if present.
    #[inline]
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    /// Symbol for a brightness sample.
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::SymbolRamp;
    /// let ramp = SymbolRamp::new("@#+.", false).unwrap();
    /// assert_eq!(ramp.map(0), '@');
    /// assert_eq!(ramp.map(255), '.');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, sample: u8) -> char {
        self.symbols[quantize(sample, self.symbols.len())]
    }

    /// Representative brightness for `symbol`, or `None` if it is not in
    /// the ramp.
    #[inline]
    #[must_use]
    pub fn unmap(&self, symbol: char) -> Option<u8> {
        self.index_of(symbol)
            .map(|idx| dequantize(idx, self.symbols.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ramp_sizes() {
        assert_eq!(SymbolRamp::canonical(false).len(), 69);
        assert_eq!(SymbolRamp::canonical(true).len(), 70);
        assert!(SymbolRamp::canonical(true).has_spaces());
    }

    #[test]
    fn canonical_symbols_are_distinct() {
        let ramp = SymbolRamp::canonical(true);
        assert!(SymbolRamp::new(CHARSET_CANONICAL, true).is_ok());
        for (i, c) in ramp.symbols().iter().enumerate() {
            assert_eq!(ramp.index_of(*c), Some(i));
        }
    }

    #[test]
    fn quantize_covers_range() {
        for n in [2, 4, 69, 70] {
            assert_eq!(quantize(0, n), 0);
            assert_eq!(quantize(255, n), n - 1);
        }
    }

    #[test]
    fn quantize_monotonic() {
        for n in [2, 3, 4, 69, 70] {
            let mut prev = 0usize;
            for s in 0..=255u8 {
                let idx = quantize(s, n);
                assert!(idx >= prev, "quantize non monotone à {s} (n={n})");
                assert!(idx < n);
                prev = idx;
            }
        }
    }

    #[test]
    fn round_trip_error_is_bounded() {
        for n in [2, 3, 4, 5, 69, 70] {
            let bound = 255usize.div_ceil(n);
            for s in 0..=255u8 {
                let back = dequantize(quantize(s, n), n);
                let err = usize::from(s.abs_diff(back));
                assert!(err <= bound, "erreur {err} > {bound} pour {s} (n={n})");
            }
        }
    }

    #[test]
    fn dequantize_is_stable_under_requantize() {
        for n in [2, 3, 4, 69, 70] {
            for idx in 0..n {
                assert_eq!(quantize(dequantize(idx, n), n), idx);
            }
        }
    }

    #[test]
    fn four_symbol_scenario() {
        let ramp = SymbolRamp::new("@#+.", false).unwrap();
        let row: String = [0u8, 85, 170, 255].iter().map(|&s| ramp.map(s)).collect();
        assert_eq!(row, "@#+.");
    }

    #[test]
    fn space_conflicts_with_explicit_space() {
        let err = SymbolRamp::new("@ ", true).unwrap_err();
        assert!(matches!(err, CodecError::InvalidRamp(_)));
    }

    #[test]
    fn unmap_unknown_symbol() {
        let ramp = SymbolRamp::canonical(false);
        assert_eq!(ramp.unmap(' '), None);
        assert_eq!(ramp.unmap('$'), Some(0));
    }
}
