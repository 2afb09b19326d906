/// Conversion engine for asciify.
///
/// Converts pixel sources to character grids, and grids back to
/// approximate grayscale images.
pub mod imagify;
pub mod luminance;

pub use imagify::imagify;
pub use luminance::{asciify, rgba_luminance};
