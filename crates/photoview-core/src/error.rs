use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoViewError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Gesture script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, PhotoViewError>;
