// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Image-file → OpenGL texture loading behind a mockable driver trait.
//!
//! The core is [`Texture2D`], a move-only handle owning at most one
//! driver texture resource:
//!
//! ```no_run
//! use std::rc::Rc;
//! use texlib::{GlBackend, LoadOptions, Texture2D};
//!
//! # fn main() -> texlib::Result<()> {
//! // A GL context must be current and gl::load_with already done.
//! let driver = Rc::new(GlBackend::new());
//!
//! let mut texture = Texture2D::new(driver);
//! texture.load("assets/crate.png", &LoadOptions::new())?;
//!
//! texture.bind(0);
//! // ... draw ...
//! texture.unbind(0);
//! # Ok(())
//! # }
//! ```
//!
//! Loading decodes via the `image` crate (any format it supports,
//! forced to RGBA8), flips rows to GL's bottom-to-top convention, and
//! uploads with repeat/linear sampling defaults and optional mipmaps.
//! [`save_framebuffer`] goes the other way: framebuffer readback →
//! flip → image file.
//!
//! All GPU access goes through the [`GlDriver`] trait. [`GlBackend`]
//! is the canonical implementor over raw GL; [`RecordingDriver`] is a
//! headless stand-in that models the per-unit binding table in memory,
//! so resource lifetimes and binding state are testable without a GPU.
//!
//! Everything here is single-threaded by design: GL contexts are
//! thread-bound, handles hold `Rc<dyn GlDriver>` and are not `Send`.

mod decode;
mod error;
mod gl_driver;
mod snapshot;
mod texture;

pub mod driver;
pub mod flip;
pub mod recording;

pub use driver::{
    FilterMode, GlDriver, SamplingParams, TextureId, WrapMode, MAX_TEXTURE_UNITS,
};
pub use error::{Result, TextureError};
pub use gl_driver::GlBackend;
pub use recording::RecordingDriver;
pub use snapshot::save_framebuffer;
pub use texture::{LoadOptions, Texture2D};
