/// ASCII density-ramp codec for asciify.
///
/// Encodes grayscale grids to symbol rows and decodes them back.
pub mod convert;
pub mod decode;
pub mod encode;
pub mod layout;

pub use convert::{asciify, deasciify};
pub use decode::decode;
pub use encode::encode;
pub use layout::{resolve_for_decode, resolve_for_encode};
