//! Image decoding for rotocrop.
//!
//! Decoding is delegated to the `image` crate. Decoded images are held as a
//! [`PixelGrid`]: 8 bits per sample, row-major, interleaved channels. The
//! source channel layout (gray, gray + alpha, RGB, RGBA) is kept so that a
//! decode/transform/encode cycle does not change the file's color model.
//!
//! # Examples
//!
//! ```ignore
//! use rotocrop_core::decode::decode_file;
//!
//! let grid = decode_file(Path::new("dataset/cat.png"))?;
//! println!("Decoded {}x{} image", grid.width, grid.height);
//! ```

mod file;
mod types;

pub use file::{decode_bytes, decode_file};
pub use types::{DecodeError, PixelGrid};
