pub const DEFAULT_TARGET: &str = "http://localhost:8001";
pub const DEFAULT_THUMBNAILS_FILE: &str = "thumbnails.json";
pub const DEFAULT_EXPECTED_THUMBNAILS_DIR: &str = "expected_thumbnails";
pub const DEFAULT_REPORTS_DIR: &str = "reports";

pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 800;
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 600;
pub const DEFAULT_THUMBNAIL_ANIMATED: bool = false;
