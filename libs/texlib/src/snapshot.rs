// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Framebuffer → image-file snapshots.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::driver::GlDriver;
use crate::error::{Result, TextureError};
use crate::flip;

/// Read the current framebuffer and write it to `path`.
///
/// Reads `width × height` RGBA8 pixels through the driver, flips the
/// rows in place (GL readbacks are bottom-to-top, image files
/// top-to-bottom), and encodes to the format implied by the path's
/// extension. The pixel buffer is dropped on return.
///
/// This is a free function over the driver rather than a
/// [`Texture2D`](crate::Texture2D) method: it reads the framebuffer,
/// never a texture resource.
pub fn save_framebuffer(
    driver: &dyn GlDriver,
    width: u32,
    height: u32,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let expected = width as usize * height as usize * flip::BYTES_PER_PIXEL;

    let mut pixels = driver.read_pixels_rgba8(width, height);
    if pixels.len() != expected {
        return Err(TextureError::SnapshotSize {
            expected,
            actual: pixels.len(),
        });
    }

    flip::flip_rows_in_place(&mut pixels, width, height);

    // Length was checked above, so from_raw cannot fail.
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, pixels)
        .ok_or(TextureError::SnapshotSize {
            expected,
            actual: 0,
        })?;
    buffer.save(path).map_err(TextureError::Encode)?;

    tracing::debug!(path = %path.display(), width, height, "framebuffer snapshot written");
    Ok(())
}
