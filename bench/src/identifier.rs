use crate::error::BenchError;
use std::fmt::Display;
use std::str::FromStr;

const MXC_SCHEME: &str = "mxc://";

/// A stored media item, addressed as `origin/media-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaIdentifier {
    pub origin: String,
    pub media_id: String,
}

impl MediaIdentifier {
    pub fn new(origin: &str, media_id: &str) -> Result<Self, BenchError> {
        if origin.is_empty() || media_id.is_empty() {
            return Err(BenchError::InvalidIdentifier(format!("{origin}/{media_id}")));
        }

        Ok(Self {
            origin: origin.to_owned(),
            media_id: media_id.to_owned(),
        })
    }

    /// File name of the reference thumbnail, path separators replaced with `_`.
    pub fn reference_file_name(&self) -> String {
        format!("{}_{}.png", self.origin, self.media_id)
    }
}

impl FromStr for MediaIdentifier {
    type Err = BenchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let stripped = value.strip_prefix(MXC_SCHEME).unwrap_or(value);
        let stripped = stripped.split('?').next().unwrap_or_default();

        let mut parts = stripped.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(origin), Some(media_id), None) => MediaIdentifier::new(origin, media_id)
                .map_err(|_| BenchError::InvalidIdentifier(value.to_owned())),
            _ => Err(BenchError::InvalidIdentifier(value.to_owned())),
        }
    }
}

impl Display for MediaIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.origin, self.media_id)
    }
}
