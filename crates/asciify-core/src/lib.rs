/// Types, symbol ramp, and configuration for asciify.
///
/// This crate contains the shared value types and error kinds used across
/// the asciify workspace. It has no notion of files, terminals or images.

pub mod charset;
pub mod config;
pub mod error;
pub mod grid;
pub mod traits;

pub use charset::{SymbolRamp, dequantize, quantize};
pub use config::ConvertConfig;
pub use error::{CodecError, CoreError};
pub use grid::{PixelGrid, Resolution, TextBlock};
