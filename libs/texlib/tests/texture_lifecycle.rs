// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end texture lifecycle over the recording driver: decode real
//! files from a scratch dir, assert the upload/binding/delete traffic a
//! real GL driver would have seen.

use std::path::PathBuf;
use std::rc::Rc;

use image::{ImageBuffer, Rgba};
use texlib::{
    save_framebuffer, FilterMode, LoadOptions, RecordingDriver, SamplingParams, Texture2D,
    WrapMode,
};

/// Write a 2×2 PNG whose four pixels are all distinct, so flipped rows
/// are distinguishable from unflipped ones.
///
/// Top row: red, green. Bottom row: blue, white.
fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("fixture.png");
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_fn(2, 2, |x, y| match (x, y) {
        (0, 0) => Rgba([255, 0, 0, 255]),
        (1, 0) => Rgba([0, 255, 0, 255]),
        (0, 1) => Rgba([0, 0, 255, 255]),
        _ => Rgba([255, 255, 255, 255]),
    });
    img.save(&path).expect("fixture write");
    path
}

// The fixture's bytes after the vertical flip: bottom row first.
const FLIPPED: [u8; 16] = [
    0, 0, 255, 255, // blue
    255, 255, 255, 255, // white
    255, 0, 0, 255, // red
    0, 255, 0, 255, // green
];

fn rig() -> (Rc<RecordingDriver>, Texture2D) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let driver = Rc::new(RecordingDriver::new());
    let texture = Texture2D::new(driver.clone());
    (driver, texture)
}

#[test]
fn load_uploads_flipped_rgba8() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();

    texture.load(&path, &LoadOptions::new()).unwrap();

    assert!(texture.is_loaded());
    assert_ne!(texture.id(), 0);
    assert_eq!((texture.width(), texture.height()), (2, 2));

    let uploads = driver.uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].target, texture.id());
    assert_eq!((uploads[0].width, uploads[0].height), (2, 2));
    assert_eq!(uploads[0].pixels, FLIPPED);
}

#[test]
fn load_restores_scratch_unit_to_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();

    texture.load(&path, &LoadOptions::new()).unwrap();
    assert_eq!(driver.bound(0), 0);
}

#[test]
fn mipmaps_generated_iff_requested() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);

    let (driver, mut texture) = rig();
    texture.load(&path, &LoadOptions::new()).unwrap();
    assert_eq!(driver.mipmap_targets(), vec![texture.id()]);

    let (driver, mut texture) = rig();
    texture
        .load(&path, &LoadOptions::new().with_mipmaps(false))
        .unwrap();
    assert!(driver.mipmap_targets().is_empty());
}

#[test]
fn default_sampling_is_repeat_linear() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();

    texture.load(&path, &LoadOptions::new()).unwrap();

    let sampling = driver.sampling().expect("sampling applied during load");
    assert_eq!(sampling.wrap_s, WrapMode::Repeat);
    assert_eq!(sampling.wrap_t, WrapMode::Repeat);
    assert_eq!(sampling.min_filter, FilterMode::Linear);
    assert_eq!(sampling.mag_filter, FilterMode::Linear);
}

#[test]
fn custom_sampling_is_forwarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();

    let sampling = SamplingParams::default()
        .with_wrap(WrapMode::ClampToEdge)
        .with_filter(FilterMode::Nearest);
    texture
        .load(&path, &LoadOptions::new().with_sampling(sampling))
        .unwrap();

    assert_eq!(driver.sampling(), Some(sampling));
}

#[test]
fn failed_load_leaves_previous_texture_live() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();

    texture.load(&path, &LoadOptions::new()).unwrap();
    let first = texture.id();

    let missing = dir.path().join("missing.png");
    assert!(texture.load(&missing, &LoadOptions::new()).is_err());

    assert_eq!(texture.id(), first);
    assert!(driver.is_live(first));
    assert_eq!(driver.created_count(), 1);
}

#[test]
fn corrupt_file_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.png");
    std::fs::write(&path, b"not a png at all").unwrap();

    let (driver, mut texture) = rig();
    assert!(texture.load(&path, &LoadOptions::new()).is_err());
    assert_eq!(texture.id(), 0);
    assert_eq!(driver.created_count(), 0);
}

#[test]
fn reload_releases_prior_resource_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();

    texture.load(&path, &LoadOptions::new()).unwrap();
    let first = texture.id();
    texture.load(&path, &LoadOptions::new()).unwrap();
    let second = texture.id();

    assert_ne!(first, second);
    assert!(!driver.is_live(first));
    assert!(driver.is_live(second));
    assert_eq!(driver.delete_count(first), 1);
}

#[test]
fn drop_deletes_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let driver = Rc::new(RecordingDriver::new());

    let id = {
        let mut texture = Texture2D::new(driver.clone());
        texture.load(&path, &LoadOptions::new()).unwrap();
        texture.id()
    };

    assert!(!driver.is_live(id));
    assert_eq!(driver.delete_count(id), 1);
}

#[test]
fn explicit_release_then_drop_deletes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let driver = Rc::new(RecordingDriver::new());

    let mut texture = Texture2D::new(driver.clone());
    texture.load(&path, &LoadOptions::new()).unwrap();
    let id = texture.id();

    texture.release();
    assert!(!texture.is_loaded());
    drop(texture);

    assert_eq!(driver.delete_count(id), 1);
}

#[test]
fn bind_unbind_drive_the_unit_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();
    texture.load(&path, &LoadOptions::new()).unwrap();

    texture.bind(7);
    assert_eq!(driver.bound(7), texture.id());
    assert_eq!(driver.bound(6), 0);

    texture.unbind(7);
    assert_eq!(driver.bound(7), 0);
}

#[test]
fn snapshot_round_trips_through_an_image_file() {
    let dir = tempfile::tempdir().unwrap();
    let driver = RecordingDriver::new();

    // Framebuffer rows bottom-to-top, as GL would return them:
    // bottom = blue/white, top = red/green.
    driver.set_framebuffer(vec![
        0, 0, 255, 255, 255, 255, 255, 255, // bottom row
        255, 0, 0, 255, 0, 255, 0, 255, // top row
    ]);

    let path = dir.path().join("snapshot.png");
    save_framebuffer(&driver, 2, 2, &path).unwrap();

    let written = image::open(&path).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (2, 2));
    // File order is top-to-bottom: red/green first.
    assert_eq!(
        written.into_raw(),
        vec![
            255, 0, 0, 255, 0, 255, 0, 255, // top row
            0, 0, 255, 255, 255, 255, 255, 255, // bottom row
        ]
    );
}

#[test]
fn snapshot_of_loaded_texture_fixture_matches_source() {
    // Load a fixture, then feed its (flipped) upload back as the
    // framebuffer: the snapshot on disk must equal the original file.
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir);
    let (driver, mut texture) = rig();
    texture.load(&path, &LoadOptions::new()).unwrap();

    driver.set_framebuffer(driver.uploads()[0].pixels.clone());

    let out = dir.path().join("roundtrip.png");
    save_framebuffer(driver.as_ref(), 2, 2, &out).unwrap();

    let original = image::open(&path).unwrap().to_rgba8().into_raw();
    let written = image::open(&out).unwrap().to_rgba8().into_raw();
    assert_eq!(written, original);
}
