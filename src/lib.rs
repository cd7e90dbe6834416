//! # GBA Sprite Graphics Decoding
//!
//! `gbagfx` is a safe, pure-Rust decoder for the Game Boy Advance's BIOS LZ77
//! block format and the packed 4-bit-per-pixel tile graphics stored with it
//! in cartridge ROM images. A compressed block opens with the tag byte `0x10`
//! and a 24-bit little-endian decompressed size; the decompressed payload is
//! either a tile stream (two palette indices per byte) or a 16-entry table of
//! 15-bit BGR colors.
//!
//! ## Example
//!
//! ```rust
//! use gbagfx::decompress;
//!
//! // A block declaring 4 output bytes: tag, 24-bit size, then one flag
//! // byte (all literals) and the literals themselves.
//! let block = [0x10, 0x04, 0x00, 0x00, 0x00, 0xAA, 0xBB, 0xCC, 0xDD];
//!
//! let data = decompress(&block, 0).expect("Decompression failed");
//! assert_eq!(data, [0xAA, 0xBB, 0xCC, 0xDD]);
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod decompress;
pub mod error;
pub mod render;

pub use decompress::decompress;
pub use error::DecompressionError;
pub use render::{palette_from_bytes, render_4bpp, to_rgb};
