// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! The slice of the graphics driver this crate consumes.
//!
//! Everything the texture handle needs from OpenGL sits behind
//! [`GlDriver`]: resource create/delete, bind-to-unit, sampling
//! parameters, RGBA8 upload, mipmap generation, and framebuffer
//! readback. [`GlBackend`](crate::GlBackend) is the canonical
//! implementor; [`RecordingDriver`](crate::RecordingDriver) models the
//! same state in memory so the binding contract is testable without a
//! GPU.

/// Hardware-defined number of texture units. Unit indices passed to
/// [`Texture2D::bind`](crate::Texture2D::bind) must lie in
/// `[0, MAX_TEXTURE_UNITS)`.
pub const MAX_TEXTURE_UNITS: u32 = 32;

/// Driver-assigned texture resource identifier. `0` means "no texture".
pub type TextureId = u32;

/// Texture coordinate wrap modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    #[default]
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

/// Texture sampling filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    Linear,
    Nearest,
}

/// Sampling state applied to a texture at upload time.
///
/// Defaults to repeat wrapping on both axes and linear filtering for
/// both minification and magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplingParams {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
}

impl SamplingParams {
    /// Set both wrap axes at once.
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap_s = wrap;
        self.wrap_t = wrap;
        self
    }

    /// Set both filters at once.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.min_filter = filter;
        self.mag_filter = filter;
        self
    }
}

/// Synchronous, context-bound driver surface.
///
/// All methods mirror the underlying GL calls: they are assumed to
/// succeed (GL reports errors out of band, and this crate — like the
/// renderers it serves — does not poll them), and they must run on the
/// thread that owns the graphics context. The trait is object-safe;
/// handles hold `Rc<dyn GlDriver>` and are deliberately not `Send`.
///
/// `set_sampling`, `upload_rgba8`, and `generate_mipmaps` operate on
/// whichever texture is currently bound on the active unit, matching
/// GL's bind-to-edit model.
pub trait GlDriver {
    /// Allocate a fresh texture resource. Never returns 0.
    fn create_texture(&self) -> TextureId;

    /// Destroy a texture resource. Ignores 0.
    fn delete_texture(&self, id: TextureId);

    /// Make `id` the active texture for `unit`; `id` 0 clears the unit
    /// back to "none". `unit` must be below [`MAX_TEXTURE_UNITS`].
    fn bind_texture(&self, unit: u32, id: TextureId);

    /// Apply wrap and filter state to the currently bound texture.
    fn set_sampling(&self, params: &SamplingParams);

    /// Upload a `width × height` RGBA8 image to the currently bound
    /// texture, replacing its storage.
    fn upload_rgba8(&self, width: u32, height: u32, pixels: &[u8]);

    /// Build the mipmap chain for the currently bound texture.
    fn generate_mipmaps(&self);

    /// Read `width × height` RGBA8 pixels from the current framebuffer,
    /// rows bottom-to-top as GL returns them.
    fn read_pixels_rgba8(&self, width: u32, height: u32) -> Vec<u8>;
}
