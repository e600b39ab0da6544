use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::state::i18n::RawTranslations;

/// Translations compiled into the binary.
pub const EMBEDDED_TRANSLATIONS: &str = include_str!("../../assets/translations.json");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslationSource {
    Embedded,
    File(PathBuf),
    Url(Url),
}

impl std::fmt::Display for TranslationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationSource::Embedded => write!(f, "embedded"),
            TranslationSource::File(path) => write!(f, "{}", path.display()),
            TranslationSource::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TranslationLoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("translation root is not an object")]
    NotAnObject,
}

/// Parses the translation resource: an object keyed by language code.
pub fn parse_translations(source: &str) -> Result<RawTranslations, TranslationLoadError> {
    let value: Value = serde_json::from_str(source)?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(TranslationLoadError::NotAnObject),
    }
}

pub fn load_from_path(path: &Path) -> Result<RawTranslations, TranslationLoadError> {
    let content = fs::read_to_string(path)?;
    parse_translations(&content)
}

pub async fn fetch_translations(
    client: &Client,
    url: Url,
) -> Result<RawTranslations, TranslationLoadError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(TranslationLoadError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    parse_translations(&body)
}

pub async fn load(
    client: &Client,
    source: &TranslationSource,
) -> Result<RawTranslations, TranslationLoadError> {
    info!(source = %source, "loading translations");
    match source {
        TranslationSource::Embedded => parse_translations(EMBEDDED_TRANSLATIONS),
        TranslationSource::File(path) => load_from_path(path),
        TranslationSource::Url(url) => fetch_translations(client, url.clone()).await,
    }
}
