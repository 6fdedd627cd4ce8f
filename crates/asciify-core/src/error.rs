use thiserror::Error;

/// Errors raised by the encode/decode codec.
///
/// Every variant is surfaced to the caller as-is; the codec never pads,
/// truncates or otherwise recovers on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Zero width or height, supplied or inferred.
    #[error("Disposition invalide : {width}×{height}")]
    InvalidLayout {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Stretch coefficient below 1.
    #[error("Coefficient invalide : {0} (minimum 1)")]
    InvalidCoefficient(u32),

    /// Rows of unequal length in a text block.
    #[error("Bloc de texte malformé : ligne {row} fait {found} caractères, {expected} attendus")]
    MalformedTextBlock {
        /// Zero-based index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Character absent from the active ramp.
    #[error("Symbole inconnu {symbol:?} à la position {position}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Position in the flattened character stream.
        position: usize,
    },

    /// Decoded sample count differs from width × height.
    #[error("Disposition incohérente : {found} échantillons décodés, {expected} attendus")]
    LayoutMismatch {
        /// width × height.
        expected: usize,
        /// Samples actually produced.
        found: usize,
    },

    /// Degenerate symbol ramp (fewer than 2 symbols, or duplicates).
    #[error("Rampe de symboles invalide : {0}")]
    InvalidRamp(String),
}

/// Errors originating from the core module outside the codec itself.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Resolution string not of the form `WIDTHxHEIGHT`.
    #[error("Résolution invalide : {0:?} (format attendu : LARGEURxHAUTEUR)")]
    InvalidResolution(String),
}
