/*
 * Error Module
 *
 * The simulation and the token board cannot fail. Only loading the card and
 * chip images from disk can, and those errors end up in the settings panel.
 */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("no image path given")]
    EmptyPath,

    #[error("failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: nannou::image::ImageError,
    },
}
