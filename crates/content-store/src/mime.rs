//! Media type allow-list for sideloaded files.

/// Accepted media types and the file extension each is stored under.
pub const ALLOWED_MEDIA_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Media type for a file extension in the allow-list (`jpeg` maps to `image/jpeg`).
pub fn media_type_for_extension(extension: &str) -> Option<&'static str> {
    let lowered = extension.to_ascii_lowercase();
    let extension = if lowered == "jpeg" { "jpg" } else { lowered.as_str() };
    ALLOWED_MEDIA_TYPES
        .iter()
        .find(|(_, ext)| *ext == extension)
        .map(|(media_type, _)| *media_type)
}

/// Extension for a `Content-Type` header value in the allow-list.
///
/// Parameters such as `; charset=binary` are ignored.
pub fn extension_for_media_type(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    ALLOWED_MEDIA_TYPES
        .iter()
        .find(|(media_type, _)| *media_type == essence)
        .map(|(_, ext)| *ext)
}

/// Infer the stored extension of a download.
///
/// The extension of the URL path wins when it is in the allow-list; otherwise
/// the response content type decides. `None` means the file must be rejected.
pub fn infer_extension(url: &str, content_type: Option<&str>) -> Option<&'static str> {
    url_extension(url)
        .and_then(|ext| media_type_for_extension(&ext))
        .and_then(extension_for_media_type)
        .or_else(|| content_type.and_then(extension_for_media_type))
}

fn url_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = path.split_once("://").map_or(path, |(_, rest)| rest);
    let file = path.rsplit('/').next()?;
    let (_, ext) = file.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_string())
}
