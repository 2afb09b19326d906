/// Palette, grid, and shared types for asciify.
///
/// This crate holds the data model used across the workspace: the
/// character palette with its forward/inverse mappings, the ASCII art
/// grid and its text form, the pixel source abstraction, and the
/// TOML configuration.

pub mod charset;
pub mod config;
pub mod error;
pub mod grid;
pub mod traits;

pub use charset::{CharacterPalette, DEFAULT_PALETTE, PalettePreset};
pub use config::AsciifyConfig;
pub use error::CoreError;
pub use grid::AsciiArt;
pub use traits::{PixelBounds, PixelSource, Viewport};
