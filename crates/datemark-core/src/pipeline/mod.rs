//! The watermarking pipeline: discovery, decode, date extraction, layout,
//! font resolution, rendering, and per-file orchestration.

pub mod date;
pub mod decode;
pub mod discovery;
pub mod font;
pub mod layout;
pub mod processor;
pub mod render;

pub use date::DateExtractor;
pub use decode::{decode, DecodedImage};
pub use discovery::FileDiscovery;
pub use font::ResolvedFont;
pub use layout::{position, Anchor, EDGE_MARGIN};
pub use processor::WatermarkProcessor;
pub use render::WatermarkRenderer;
