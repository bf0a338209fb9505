//! Remote image sideloading through the media endpoint.

use crate::client::{check, decode, http_error, Created, WpRestClient};
use content_store::mime::{infer_extension, media_type_for_extension};
use content_store::{EntityId, MediaSideloader, StoreError};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use tracing::debug;

/// File name stored for a download, derived from the URL path.
///
/// `https://picsum.photos/id/3/800/600.jpg` becomes `id-3-800-600.jpg`.
fn file_name(url: &str, extension: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = path.split_once("://").map_or(path, |(_, rest)| rest);
    let path = path.split_once('/').map_or("", |(_, rest)| rest);
    let stem = path.rsplit_once('.').map_or(path, |(stem, _)| stem);

    let slug: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        format!("image.{extension}")
    } else {
        format!("{slug}.{extension}")
    }
}

#[async_trait::async_trait]
impl MediaSideloader for WpRestClient {
    async fn sideload(&self, url: &str) -> Result<EntityId, StoreError> {
        // The download goes to a third party, so no credentials are attached.
        let response = self.http.get(url).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Http(format!(
                "download of {url} failed with status {status}"
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let extension = infer_extension(url, content_type.as_deref()).ok_or_else(|| {
            StoreError::UnsupportedMediaType {
                url: url.to_string(),
                content_type: content_type.clone().unwrap_or_else(|| "unknown".to_string()),
            }
        })?;
        let media_type = media_type_for_extension(extension).unwrap_or("application/octet-stream");

        let bytes = response.bytes().await.map_err(http_error)?;
        let name = file_name(url, extension);
        debug!("Uploading {} ({} bytes) as {}", url, bytes.len(), name);

        let request = self
            .authed(self.http.post(self.url("media")))
            .header(CONTENT_TYPE, media_type)
            .header(CONTENT_DISPOSITION, format!("attachment; filename=\"{name}\""))
            .body(bytes);
        let response = check(request.send().await.map_err(http_error)?).await?;
        let created: Created = decode(response).await?;

        Ok(created.id)
    }
}
