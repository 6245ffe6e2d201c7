// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! The texture resource handle.
//!
//! [`Texture2D`] owns zero or one driver texture resource and mediates
//! its use: load from a file, bind/unbind on a texture unit, release on
//! drop. The type is move-only — duplicating the resource id would turn
//! one GL texture into two deletes.

use std::path::Path;
use std::rc::Rc;

use crate::decode;
use crate::driver::{GlDriver, SamplingParams, TextureId, MAX_TEXTURE_UNITS};
use crate::error::Result;
use crate::flip;

// Unit the loader scribbles on while uploading. Restored to "none"
// before load returns.
const SCRATCH_UNIT: u32 = 0;

/// Options for [`Texture2D::load`].
///
/// Defaults: mipmaps on, repeat wrapping, linear filtering.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    generate_mipmaps: bool,
    sampling: SamplingParams,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            generate_mipmaps: true,
            sampling: SamplingParams::default(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to build the mipmap chain after upload (default: true).
    pub fn with_mipmaps(mut self, generate: bool) -> Self {
        self.generate_mipmaps = generate;
        self
    }

    /// Wrap and filter state applied at upload time.
    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }
}

/// Handle to at most one GPU texture resource.
///
/// Operations run on the thread that owns the graphics context; the
/// handle holds `Rc<dyn GlDriver>` and is not `Send`. Dropping the
/// handle releases the resource.
pub struct Texture2D {
    driver: Rc<dyn GlDriver>,
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture2D {
    /// An empty handle. No driver resource exists until [`load`]
    /// succeeds.
    ///
    /// [`load`]: Texture2D::load
    pub fn new(driver: Rc<dyn GlDriver>) -> Self {
        Self {
            driver,
            id: 0,
            width: 0,
            height: 0,
        }
    }

    /// Decode the image at `path` and upload it as this handle's
    /// texture.
    ///
    /// The decoded buffer is flipped vertically before upload (decoders
    /// produce rows top-to-bottom; GL samples bottom-to-top), uploaded
    /// as RGBA8 at the decoded size, and dropped. Unit 0 is used as
    /// scratch during the upload and rebound to "none" before
    /// returning, so no binding side effect leaks past this call.
    ///
    /// On decode failure the handle is untouched: a previously loaded
    /// texture stays live, an unloaded handle stays empty. On a
    /// successful reload the prior resource is released once the
    /// replacement is fully uploaded.
    pub fn load(&mut self, path: impl AsRef<Path>, options: &LoadOptions) -> Result<()> {
        let path = path.as_ref();
        let mut image = decode::decode_rgba8(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), %err, "texture load failed");
        })?;

        flip::flip_rows_in_place(&mut image.pixels, image.width, image.height);

        let id = self.driver.create_texture();
        self.driver.bind_texture(SCRATCH_UNIT, id);
        self.driver.set_sampling(&options.sampling);
        self.driver.upload_rgba8(image.width, image.height, &image.pixels);
        if options.generate_mipmaps {
            self.driver.generate_mipmaps();
        }
        self.driver.bind_texture(SCRATCH_UNIT, 0);

        // At most one live resource per handle: retire the old texture
        // only after its replacement exists.
        if self.id != 0 {
            self.driver.delete_texture(self.id);
        }
        self.id = id;
        self.width = image.width;
        self.height = image.height;

        tracing::debug!(
            path = %path.display(),
            id,
            width = image.width,
            height = image.height,
            mipmaps = options.generate_mipmaps,
            "texture loaded"
        );
        Ok(())
    }

    /// Make this texture the active one for `unit`.
    ///
    /// # Panics
    ///
    /// Panics if `unit` is not below [`MAX_TEXTURE_UNITS`] — an
    /// out-of-range unit is a caller bug, not an environmental
    /// condition.
    pub fn bind(&self, unit: u32) {
        assert!(
            unit < MAX_TEXTURE_UNITS,
            "texture unit {unit} out of range (must be < {MAX_TEXTURE_UNITS})"
        );
        self.driver.bind_texture(unit, self.id);
    }

    /// Clear the active texture for `unit` back to "none".
    ///
    /// # Panics
    ///
    /// Same contract as [`bind`](Texture2D::bind).
    pub fn unbind(&self, unit: u32) {
        assert!(
            unit < MAX_TEXTURE_UNITS,
            "texture unit {unit} out of range (must be < {MAX_TEXTURE_UNITS})"
        );
        self.driver.bind_texture(unit, 0);
    }

    /// Release the driver resource now instead of at drop. Idempotent.
    pub fn release(&mut self) {
        if self.id != 0 {
            self.driver.delete_texture(self.id);
            self.id = 0;
            self.width = 0;
            self.height = 0;
        }
    }

    /// Driver resource id (0 = nothing loaded).
    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn is_loaded(&self) -> bool {
        self.id != 0
    }

    /// Width of the last successful load, 0 before one.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the last successful load, 0 before one.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Texture2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture2D")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
