use super::defaults::*;
use clap::{Args, ValueEnum};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailMethod {
    #[default]
    #[display("crop")]
    Crop,
    #[display("scale")]
    Scale,
}

/// Query parameters sent with an explicit thumbnail request.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThumbnailParams {
    /// Requested thumbnail width in pixels
    #[arg(long, default_value_t = DEFAULT_THUMBNAIL_WIDTH)]
    pub width: u32,

    /// Requested thumbnail height in pixels
    #[arg(long, default_value_t = DEFAULT_THUMBNAIL_HEIGHT)]
    pub height: u32,

    /// Resizing method
    #[arg(long, value_enum, default_value_t = ThumbnailMethod::default())]
    pub method: ThumbnailMethod,

    /// Request an animated thumbnail
    #[arg(long, default_value_t = DEFAULT_THUMBNAIL_ANIMATED)]
    pub animated: bool,
}

impl Default for ThumbnailParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_THUMBNAIL_WIDTH,
            height: DEFAULT_THUMBNAIL_HEIGHT,
            method: ThumbnailMethod::default(),
            animated: DEFAULT_THUMBNAIL_ANIMATED,
        }
    }
}
