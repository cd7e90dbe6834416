#![no_main]

use libfuzzer_sys::fuzz_target;
use gbagfx::{decompress, palette_from_bytes, render_4bpp};

/// Verifies that the decompressor safely handles arbitrary, potentially malformed input.
///
/// This simulates scenarios involving corrupted ROM regions, bad pointer-table
/// entries, or random noise.
///
/// # Invariant
/// The decompressor must return either `Ok(_)` or `Err(_)`. It must **never** panic
/// or cause memory safety violations (segfaults), regardless of the input data.
/// When it succeeds, the output length must equal the declared length in the header.
fn verify_decompression_robustness(data: &[u8]) {
    if let Ok(output) = decompress(data, 0) {
        let declared = u32::from_le_bytes([data[1], data[2], data[3], 0]) as usize;
        assert_eq!(
            output.len(),
            declared,
            "Decompressed length diverged from the declared length"
        );
    }
}

/// Verifies that the raster decoder tolerates streams of any length.
///
/// # Invariant
/// `render_4bpp` has no failure path: for any tile stream it must return a
/// full RGBA canvas, with every pixel's alpha either 0 or 255.
fn verify_render_robustness(data: &[u8]) {
    let (palette_bytes, tiles) = data.split_at(data.len().min(32));
    let palette = palette_from_bytes(palette_bytes);

    let rgba = render_4bpp(tiles, &palette, 64, 64);
    assert_eq!(rgba.len(), 64 * 64 * 4);
    assert!(rgba.chunks_exact(4).all(|q| q[3] == 0 || q[3] == 255));
}

fuzz_target!(|data: &[u8]| {
    // 1. Robustness: Ensure random noise doesn't crash the decompressor.
    verify_decompression_robustness(data);

    // 2. Leniency: Ensure truncated tile streams still yield a full canvas.
    verify_render_robustness(data);
});
