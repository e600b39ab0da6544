use std::collections::BTreeMap;
use std::path::PathBuf;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::io::translations_io::TranslationSource;

/// Env var naming a TOML file that replaces the embedded site config.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
/// Env var naming a local translations file; bypasses the HTTP fetch.
pub const TRANSLATIONS_ENV: &str = "FOLIO_TRANSLATIONS";

const EMBEDDED_CONFIG: &str = include_str!("../assets/site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Static settings of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_lang")]
    pub default_lang: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Origin the translations resource is fetched from. Without one the
    /// translations bundled into the binary are used.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api: ApiConfig,
    /// Language code -> CV document path.
    #[serde(default = "default_cv_files")]
    pub cv_files: BTreeMap<String, String>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_contact_endpoint")]
    pub contact: String,
    #[serde(default = "default_translations_resource")]
    pub translations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Scroll offset in pixels past which the scroll-top button shows.
    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: f64,
    /// Script providing the `lottie` global. Animations stay static without it.
    #[serde(default = "default_animation_player")]
    pub animation_player: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_lang: default_lang(),
            languages: default_languages(),
            base_url: None,
            api: ApiConfig::default(),
            cv_files: default_cv_files(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            contact: default_contact_endpoint(),
            translations: default_translations_resource(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold: default_scroll_top_threshold(),
            animation_player: default_animation_player(),
        }
    }
}

fn default_lang() -> String {
    "es".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["es".to_string(), "en".to_string()]
}

fn default_contact_endpoint() -> String {
    "https://formsubmit.co/ajax/avg2620@gmail.com".to_string()
}

fn default_translations_resource() -> String {
    "translations.json".to_string()
}

fn default_cv_files() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "es".to_string(),
            "/assets/docs/CV_ES_WEB_ANDREY_VILLALOBOS_GOMEZ.pdf".to_string(),
        ),
        (
            "en".to_string(),
            "/assets/docs/CV_EN_WEB_ANDREY_VILLALOBOS_GOMEZ.pdf".to_string(),
        ),
    ])
}

fn default_scroll_top_threshold() -> f64 {
    240.0
}

fn default_animation_player() -> Option<String> {
    Some("https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js".to_string())
}

impl SiteConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    /// Embedded config, or the file named by `FOLIO_CONFIG`.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                info!(path = %path, "loading site config override");
                Self::from_path(std::path::Path::new(&path))
            }
            Err(_) => Self::from_toml(EMBEDDED_CONFIG),
        }
    }

    /// Like [`SiteConfig::load`], but never fails: errors are logged and the
    /// built-in defaults are used.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default site config");
            Self::default()
        })
    }

    pub fn base(&self) -> Result<Option<Url>, ConfigError> {
        self.base_url.as_deref().map(parse_url).transpose()
    }

    pub fn contact_url(&self) -> Result<Url, ConfigError> {
        parse_url(&self.api.contact)
    }

    /// `api.translations` resolved against `base_url`, when one is set.
    pub fn translations_url(&self) -> Result<Option<Url>, ConfigError> {
        let Some(base) = self.base()? else {
            return Ok(None);
        };
        base.join(&self.api.translations)
            .map(Some)
            .map_err(|err| ConfigError::InvalidUrl {
                url: self.api.translations.clone(),
                reason: err.to_string(),
            })
    }

    /// Where the translations come from: a local file when
    /// `FOLIO_TRANSLATIONS` is set, the resolved URL when `base_url` is
    /// configured, the bundled copy otherwise.
    pub fn translation_source(&self) -> Result<TranslationSource, ConfigError> {
        if let Ok(path) = std::env::var(TRANSLATIONS_ENV) {
            return Ok(TranslationSource::File(PathBuf::from(path)));
        }
        Ok(match self.translations_url()? {
            Some(url) => TranslationSource::Url(url),
            None => TranslationSource::Embedded,
        })
    }

    /// CV path for `lang`, falling back to the default language's file.
    pub fn cv_file(&self, lang: &str) -> Option<&str> {
        self.cv_files
            .get(lang)
            .or_else(|| self.cv_files.get(&self.default_lang))
            .map(String::as_str)
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|err| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })
}
