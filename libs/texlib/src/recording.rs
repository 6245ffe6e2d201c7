// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Headless [`GlDriver`] that records everything a real driver would do.
//!
//! The implicit global state GL keeps — which texture is bound on which
//! unit, which ids are alive, what got uploaded — is modeled here as
//! plain data, so tests can assert the driver-state contract without a
//! GL context. The framebuffer is a settable byte buffer, which makes
//! snapshot readback testable too.

use parking_lot::Mutex;

use crate::driver::{GlDriver, SamplingParams, TextureId, MAX_TEXTURE_UNITS};

/// One recorded `upload_rgba8` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    /// Texture bound on the active unit when the upload happened.
    pub target: TextureId,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[derive(Debug, Default)]
struct DriverState {
    next_id: TextureId,
    live: Vec<TextureId>,
    deletes: Vec<TextureId>,
    // Binding table indexed by unit number.
    bound: [TextureId; MAX_TEXTURE_UNITS as usize],
    active_unit: u32,
    sampling: Option<SamplingParams>,
    uploads: Vec<UploadRecord>,
    mipmap_targets: Vec<TextureId>,
    framebuffer: Vec<u8>,
}

/// In-memory driver for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    state: Mutex<DriverState>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture currently bound on `unit` (0 = none).
    pub fn bound(&self, unit: u32) -> TextureId {
        self.state.lock().bound[unit as usize]
    }

    /// Whether `id` has been created and not yet deleted.
    pub fn is_live(&self, id: TextureId) -> bool {
        self.state.lock().live.contains(&id)
    }

    /// How many times `id` has been deleted. Anything above 1 is a
    /// double-free in the code under test.
    pub fn delete_count(&self, id: TextureId) -> usize {
        self.state.lock().deletes.iter().filter(|d| **d == id).count()
    }

    /// Number of texture resources ever created.
    pub fn created_count(&self) -> usize {
        self.state.lock().next_id as usize
    }

    /// Sampling state from the most recent `set_sampling` call.
    pub fn sampling(&self) -> Option<SamplingParams> {
        self.state.lock().sampling
    }

    /// All recorded uploads, in call order.
    pub fn uploads(&self) -> Vec<UploadRecord> {
        self.state.lock().uploads.clone()
    }

    /// Textures that had a mipmap chain generated, in call order.
    pub fn mipmap_targets(&self) -> Vec<TextureId> {
        self.state.lock().mipmap_targets.clone()
    }

    /// Install the pixels `read_pixels_rgba8` will hand back.
    ///
    /// GL readbacks are bottom-to-top, so pass rows in that order when
    /// the test cares about orientation.
    pub fn set_framebuffer(&self, pixels: Vec<u8>) {
        self.state.lock().framebuffer = pixels;
    }
}

impl GlDriver for RecordingDriver {
    fn create_texture(&self) -> TextureId {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.live.push(id);
        tracing::trace!(id, "recording driver: create_texture");
        id
    }

    fn delete_texture(&self, id: TextureId) {
        if id == 0 {
            return;
        }
        let mut state = self.state.lock();
        state.live.retain(|live| *live != id);
        state.deletes.push(id);
        tracing::trace!(id, "recording driver: delete_texture");
    }

    fn bind_texture(&self, unit: u32, id: TextureId) {
        let mut state = self.state.lock();
        state.active_unit = unit;
        state.bound[unit as usize] = id;
    }

    fn set_sampling(&self, params: &SamplingParams) {
        self.state.lock().sampling = Some(*params);
    }

    fn upload_rgba8(&self, width: u32, height: u32, pixels: &[u8]) {
        let mut state = self.state.lock();
        let target = state.bound[state.active_unit as usize];
        state.uploads.push(UploadRecord {
            target,
            width,
            height,
            pixels: pixels.to_vec(),
        });
    }

    fn generate_mipmaps(&self) {
        let mut state = self.state.lock();
        let target = state.bound[state.active_unit as usize];
        state.mipmap_targets.push(target);
    }

    fn read_pixels_rgba8(&self, _width: u32, _height: u32) -> Vec<u8> {
        // Hands back whatever was installed, whatever the requested
        // size — callers own the size check, and tests rely on being
        // able to feed them a short buffer.
        self.state.lock().framebuffer.clone()
    }
}
