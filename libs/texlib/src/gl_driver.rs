// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Canonical [`GlDriver`] implementor over the `gl` crate.
//!
//! The caller owns context creation: a GL context must be current on
//! this thread and `gl::load_with` must have run before any method here
//! is called. Like the raw API it wraps, none of these calls report
//! failure; GPU-side errors (e.g. out-of-memory) surface through
//! `glGetError`, which this crate does not poll.

use crate::driver::{FilterMode, GlDriver, SamplingParams, TextureId, WrapMode};

fn gl_wrap(mode: WrapMode) -> i32 {
    (match mode {
        WrapMode::Repeat => gl::REPEAT,
        WrapMode::MirroredRepeat => gl::MIRRORED_REPEAT,
        WrapMode::ClampToEdge => gl::CLAMP_TO_EDGE,
        WrapMode::ClampToBorder => gl::CLAMP_TO_BORDER,
    }) as i32
}

fn gl_filter(mode: FilterMode) -> i32 {
    (match mode {
        FilterMode::Linear => gl::LINEAR,
        FilterMode::Nearest => gl::NEAREST,
    }) as i32
}

/// Stateless pass-through to the loaded GL function pointers.
///
/// All shared state lives in the driver itself (the per-unit binding
/// table, the bind-to-edit target), which is why this type carries no
/// fields.
#[derive(Debug, Default)]
pub struct GlBackend;

impl GlBackend {
    pub fn new() -> Self {
        Self
    }
}

impl GlDriver for GlBackend {
    fn create_texture(&self) -> TextureId {
        let mut id: TextureId = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
        }
        id
    }

    fn delete_texture(&self, id: TextureId) {
        if id == 0 {
            return;
        }
        unsafe {
            gl::DeleteTextures(1, &id);
        }
    }

    fn bind_texture(&self, unit: u32, id: TextureId) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, id);
        }
    }

    fn set_sampling(&self, params: &SamplingParams) {
        unsafe {
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl_wrap(params.wrap_s));
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl_wrap(params.wrap_t));
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MIN_FILTER,
                gl_filter(params.min_filter),
            );
            gl::TexParameteri(
                gl::TEXTURE_2D,
                gl::TEXTURE_MAG_FILTER,
                gl_filter(params.mag_filter),
            );
        }
    }

    fn upload_rgba8(&self, width: u32, height: u32, pixels: &[u8]) {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        unsafe {
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as i32,
                width as i32,
                height as i32,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const _,
            );
        }
    }

    fn generate_mipmaps(&self) {
        unsafe {
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }
    }

    fn read_pixels_rgba8(&self, width: u32, height: u32) -> Vec<u8> {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        unsafe {
            gl::ReadPixels(
                0,
                0,
                width as i32,
                height as i32,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels.as_mut_ptr() as *mut _,
            );
        }
        pixels
    }
}
