/// File adapters for asciify: decode images, encode reconstructions,
/// read and write art text.

pub mod image;
pub mod text;
