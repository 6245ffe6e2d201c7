// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! In-place vertical mirror for RGBA8 pixel buffers.
//!
//! Decoders hand back rows top-to-bottom; OpenGL samples textures
//! bottom-to-top. The same pass also converts GL framebuffer readbacks
//! (bottom-to-top) into file order before encoding.

/// Bytes per pixel for the RGBA8 buffers this crate moves around.
pub const BYTES_PER_PIXEL: usize = 4;

/// Mirror `pixels` vertically, in place.
///
/// Swaps each of the first `height / 2` rows with its mirror row
/// (`height - row - 1`). Odd heights leave the middle row untouched —
/// it maps to itself. O(width × height), no allocation.
///
/// Debug-asserts that `pixels` is exactly `width × height × 4` bytes.
pub fn flip_rows_in_place(pixels: &mut [u8], width: u32, height: u32) {
    let stride = width as usize * BYTES_PER_PIXEL;
    let height = height as usize;
    debug_assert_eq!(pixels.len(), stride * height);

    for row in 0..height / 2 {
        let mirror = height - row - 1;
        let (head, tail) = pixels.split_at_mut(mirror * stride);
        head[row * stride..(row + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }
}
