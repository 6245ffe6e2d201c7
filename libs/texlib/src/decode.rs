// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! File → RGBA8 decoding via the `image` crate.

use std::path::Path;

use image::ImageReader;

use crate::error::{Result, TextureError};

/// A decoded image, forced to four channels. Transient: lives only for
/// the duration of a load.
pub(crate) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode the image at `path` to a flat row-major RGBA8 buffer.
///
/// Whatever the source channel count, the result is expanded to RGBA.
/// Fails with [`TextureError::Io`] when the file cannot be opened and
/// [`TextureError::Decode`] on unsupported or corrupt data.
pub(crate) fn decode_rgba8(path: &Path) -> Result<DecodedImage> {
    let decoded = ImageReader::open(path)?
        .decode()
        .map_err(TextureError::Decode)?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    Ok(DecodedImage {
        width,
        height,
        pixels: decoded.into_raw(),
    })
}
