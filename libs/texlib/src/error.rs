use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("image decode failed: {0}")]
    Decode(image::ImageError),

    #[error("image encode failed: {0}")]
    Encode(image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("framebuffer readback returned {actual} bytes, expected {expected}")]
    SnapshotSize { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, TextureError>;
