//! I/O layer: decoding input sheets and writing PNG outputs.
pub mod reader;
pub use reader::open_image;

pub mod writers;
pub use writers::png::write_png;
