use thiserror::Error;

/// Errors that can occur while loading or saving the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the base photo
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Unsupported file: {0}")]
    Unsupported(String),
}

/// Result type for image loading
pub type ImageLoadResult<T> = Result<T, ImageLoadError>;
