/// Image I/O collaborators for asciify: grayscale loading, saving and resampling.

pub mod image;
pub mod resize;
