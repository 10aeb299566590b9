use thiserror::Error;

pub type Result<T> = std::result::Result<T, GravatarError>;

#[derive(Error, Debug)]
pub enum GravatarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Parsing error")]
    Parse,
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("Runtime error: {0}")]
    Runtime(&'static str),
    #[error("Invalid email hash: {0}")]
    InvalidHash(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for GravatarError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}

impl From<hex::FromHexError> for GravatarError {
    fn from(value: hex::FromHexError) -> Self {
        Self::InvalidHash(value.to_string())
    }
}
