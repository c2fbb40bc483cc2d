use crate::args::thumbnail::ThumbnailParams;
use crate::error::BenchError;
use crate::identifier::MediaIdentifier;
use bytes::Bytes;
use reqwest::Url;

const THUMBNAIL_PATH: [&str; 4] = ["_matrix", "media", "r0", "thumbnail"];

/// HTTP client for the thumbnail endpoint of a media server.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MediaClient {
    pub api_url: Url,
    client: reqwest::Client,
}

impl MediaClient {
    pub fn new(api_url: &str) -> Result<Self, BenchError> {
        let parsed = Url::parse(api_url).map_err(|_| BenchError::CannotParseUrl(api_url.to_owned()))?;
        if parsed.cannot_be_a_base() {
            return Err(BenchError::CannotParseUrl(api_url.to_owned()));
        }

        Ok(Self {
            api_url: parsed,
            client: reqwest::Client::new(),
        })
    }

    pub fn thumbnail_url(&self, identifier: &MediaIdentifier) -> Result<Url, BenchError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| BenchError::CannotParseUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(THUMBNAIL_PATH)
            .push(&identifier.origin)
            .push(&identifier.media_id);
        Ok(url)
    }

    /// Fetches a thumbnail and returns the full response body.
    ///
    /// Without `params` no query string is sent and the server picks its defaults.
    /// Any non-success status is an error.
    pub async fn get_thumbnail(
        &self,
        identifier: &MediaIdentifier,
        params: Option<&ThumbnailParams>,
    ) -> Result<Bytes, BenchError> {
        let url = self.thumbnail_url(identifier)?;
        let mut request = self.client.get(url);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BenchError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}
