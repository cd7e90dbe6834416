use alloc::vec;
use alloc::vec::Vec;

// --- Constants ---

/// Edge length of one tile in pixels.
pub const TILE_DIM: usize = 8;

/// Bytes of packed 4bpp data per tile (two pixels per byte).
pub const TILE_BYTES: usize = TILE_DIM * TILE_DIM / 2;

/// Number of entries in a full 4bpp palette.
pub const PALETTE_LEN: usize = 16;

/// Canvas edge length of the uncompressed front/back sprite format.
pub const SPRITE_DIM: usize = 64;

/// Converts a 15-bit BGR hardware color to an RGB triple.
///
/// Each 5-bit channel is scaled by 8, so full intensity maps to 248 rather
/// than 255. This matches the quantization of the hardware color DAC and
/// must not be "corrected" to a full-range expansion.
#[must_use]
pub const fn to_rgb(color: u16) -> [u8; 3] {
    let r = ((color & 0x1F) * 8) as u8;
    let g = (((color >> 5) & 0x1F) * 8) as u8;
    let b = (((color >> 10) & 0x1F) * 8) as u8;
    [r, g, b]
}

/// Reads a 16-entry palette from a little-endian u16 color table.
///
/// Entries past the end of `bytes` are left zero (black).
#[must_use]
pub fn palette_from_bytes(bytes: &[u8]) -> [u16; PALETTE_LEN] {
    let mut palette = [0u16; PALETTE_LEN];
    for (entry, pair) in palette.iter_mut().zip(bytes.chunks_exact(2)) {
        *entry = u16::from_le_bytes([pair[0], pair[1]]);
    }
    palette
}

/// Decodes a packed 4bpp tile stream onto a `width` x `height` RGBA canvas.
///
/// The canvas is covered by 8x8 tiles in row-major tile order. Within a
/// tile, each of the 8 rows consumes 4 bytes; every byte holds two adjacent
/// pixels, low nibble on the left. Palette index 0 is the transparent entry
/// and decodes with alpha 0; every other index is opaque regardless of its
/// color value.
///
/// A stream shorter than the canvas stops decoding in place and leaves the
/// remaining pixels transparent black; excess bytes are ignored. Dimensions
/// that are not whole multiples of 8 truncate to whole tiles, and a nibble
/// addressing past the end of `palette` decodes as color 0.
#[must_use]
pub fn render_4bpp(tiles: &[u8], palette: &[u16], width: usize, height: usize) -> Vec<u8> {
    let mut rgba = vec![0u8; width * height * 4];
    let mut stream = tiles.iter();

    'canvas: for tile_y in 0..height / TILE_DIM {
        for tile_x in 0..width / TILE_DIM {
            for y in 0..TILE_DIM {
                for x in 0..TILE_DIM / 2 {
                    let Some(&byte) = stream.next() else {
                        break 'canvas;
                    };
                    let row = tile_y * TILE_DIM + y;
                    let col = tile_x * TILE_DIM + x * 2;
                    put_pixel(&mut rgba, palette, row * width + col, byte & 0xF);
                    put_pixel(&mut rgba, palette, row * width + col + 1, byte >> 4);
                }
            }
        }
    }

    rgba
}

/// Writes one palette-indexed pixel into the RGBA buffer.
#[inline]
fn put_pixel(rgba: &mut [u8], palette: &[u16], pixel: usize, index: u8) {
    let color = palette.get(index as usize).copied().unwrap_or(0);
    let [r, g, b] = to_rgb(color);
    let alpha = if index == 0 { 0 } else { 0xFF };
    rgba[pixel * 4..pixel * 4 + 4].copy_from_slice(&[r, g, b, alpha]);
}
