//! Asset loading errors

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading startup assets. All of them are fatal to the game.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to read shader '{path}': {source}")]
    Shader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to load image '{path}', make sure the path is correct: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
