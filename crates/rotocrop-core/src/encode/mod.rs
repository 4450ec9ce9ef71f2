//! Image encoding for rotocrop.
//!
//! Grids are written through the `image` crate. When writing to a file the
//! output format is chosen from the path's extension, so `cat-r.png` is
//! written as PNG and `cat-r.jpg` as JPEG.

mod file;

pub use file::{encode_bytes, encode_file, EncodeError};
