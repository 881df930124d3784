//! Theme asset uploads.
//!
//! Copies local files, whole directories, or remote URLs into a theme.
//! Binary content (images, video, anything that is not UTF-8) is sent
//! base64-encoded as an attachment; text goes up verbatim; remote URLs are
//! passed by reference for Shopify to fetch.

use crate::clients::RestClient;
use crate::rest::{Asset, ResourceError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const THEME_PATH_SEPARATOR: char = '/';

/// Errors raised while uploading theme assets.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A local source could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The upload request failed.
    #[error(transparent)]
    Upload(#[from] ResourceError),
}

/// Returns `true` when the source is a remote URL rather than a local path.
///
/// Protocol-relative URLs (`//cdn.example.com/x.js`) count as remote.
#[must_use]
pub fn is_remote_source(source: &str) -> bool {
    let rest = strip_prefix_ignore_case(source, "https:")
        .or_else(|| strip_prefix_ignore_case(source, "http:"))
        .unwrap_or(source);

    let Some(host) = rest.strip_prefix("//") else {
        return false;
    };

    host.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Resolves the asset key for a local source.
///
/// A destination without a file extension is treated as a theme directory:
/// a trailing `/` is appended when missing and the source's base filename is
/// added.
#[must_use]
pub fn resolve_destination(destination: &str, source: &Path) -> String {
    if destination.contains('.') {
        return destination.to_string();
    }

    let mut key = destination.to_string();
    if !key.ends_with(THEME_PATH_SEPARATOR) {
        key.push(THEME_PATH_SEPARATOR);
    }

    if let Some(name) = source.file_name() {
        key.push_str(&name.to_string_lossy());
    }

    key
}

/// Builds the asset payload for a local file's content.
///
/// Images, video, and content that is not valid UTF-8 are base64-encoded
/// into `attachment`; everything else is sent as `value`.
#[must_use]
pub fn asset_for_content(key: String, content: Vec<u8>) -> Asset {
    let binary = infer::get(&content).is_some_and(|kind| {
        matches!(
            kind.matcher_type(),
            infer::MatcherType::Image | infer::MatcherType::Video
        )
    });

    if binary {
        return Asset {
            key,
            attachment: Some(BASE64.encode(&content)),
            ..Asset::default()
        };
    }

    match String::from_utf8(content) {
        Ok(text) => Asset {
            key,
            value: Some(text),
            ..Asset::default()
        },
        Err(err) => Asset {
            key,
            attachment: Some(BASE64.encode(err.as_bytes())),
            ..Asset::default()
        },
    }
}

/// Uploads one source (file, directory, or URL) to the theme.
///
/// Directories upload their immediate non-directory children; nested
/// directories are skipped.
///
/// # Errors
///
/// Returns [`ThemeError`] when a source cannot be read or an upload fails.
/// The first failure aborts; earlier uploads stand.
pub async fn upload(
    client: &RestClient,
    theme_id: i64,
    source: &str,
    destination: &str,
) -> Result<(), ThemeError> {
    if !is_remote_source(source) && is_dir(source).await {
        return upload_directory(client, theme_id, source, destination).await;
    }

    upload_one(client, theme_id, source, destination).await
}

async fn is_dir(path: &str) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

async fn upload_directory(
    client: &RestClient,
    theme_id: i64,
    source: &str,
    destination: &str,
) -> Result<(), ThemeError> {
    let mut entries = tokio::fs::read_dir(source)
        .await
        .map_err(|err| ThemeError::Read {
            path: source.to_string(),
            source: err,
        })?;

    while let Some(entry) = entries.next_entry().await.map_err(|err| ThemeError::Read {
        path: source.to_string(),
        source: err,
    })? {
        let file_type = entry.file_type().await.map_err(|err| ThemeError::Read {
            path: entry.path().to_string_lossy().into_owned(),
            source: err,
        })?;

        if !file_type.is_dir() {
            let path = entry.path().to_string_lossy().into_owned();
            upload_one(client, theme_id, &path, destination).await?;
        }
    }

    Ok(())
}

async fn upload_one(
    client: &RestClient,
    theme_id: i64,
    source: &str,
    destination: &str,
) -> Result<(), ThemeError> {
    let asset = if is_remote_source(source) {
        Asset {
            key: destination.to_string(),
            src: Some(source.to_string()),
            ..Asset::default()
        }
    } else {
        let content = tokio::fs::read(source)
            .await
            .map_err(|err| ThemeError::Read {
                path: source.to_string(),
                source: err,
            })?;
        let key = resolve_destination(destination, Path::new(source));
        asset_for_content(key, content)
    };

    info!(source, key = asset.key, "uploading asset");
    println!("Uploading '{}' to '{}'", source, asset.key);

    asset.update(client, theme_id).await?;
    Ok(())
}
