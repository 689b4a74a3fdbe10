//! Image encoders for rendered framebuffers.

mod png_encoder;

pub use png_encoder::PngEncoder;
