use engine_logging::{engine_debug, engine_info};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "/api";
/// Origin a relative base is resolved against, standing in for the page origin.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
pub const ORIGIN_ENV: &str = "ANALYSER_ORIGIN";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid origin {value:?}: {source}")]
    InvalidOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL {value:?} must use http or https")]
    UnsupportedScheme { value: String },
}

/// Where the analysis service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Resolves `base` (absolute, or relative to `origin`) into an endpoint root.
    ///
    /// An empty `base` falls back to [`DEFAULT_API_BASE_URL`].
    pub fn resolve(base: &str, origin: &str) -> Result<Self, ConfigError> {
        let base = base.trim();
        let base = if base.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            base
        };

        let resolved = match Url::parse(base) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin_url = parse_origin(origin)?;
                origin_url
                    .join(base)
                    .map_err(|source| ConfigError::InvalidBaseUrl {
                        value: base.to_string(),
                        source,
                    })?
            }
            Err(source) => {
                return Err(ConfigError::InvalidBaseUrl {
                    value: base.to_string(),
                    source,
                })
            }
        };

        if !matches!(resolved.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: base.to_string(),
            });
        }

        let base_url = resolved.as_str().trim_end_matches('/').to_string();
        engine_debug!("Resolved API base {:?} to {}", base, base_url);
        Ok(Self { base_url })
    }

    /// Builds the config from a variable lookup, applying overrides on top.
    ///
    /// Overrides win over looked-up values, which win over the defaults.
    pub fn from_lookup<F>(
        lookup: F,
        base_override: Option<&str>,
        origin_override: Option<&str>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = base_override
            .map(ToOwned::to_owned)
            .or_else(|| lookup(API_BASE_URL_ENV))
            .unwrap_or_default();
        let origin = origin_override
            .map(ToOwned::to_owned)
            .or_else(|| lookup(ORIGIN_ENV))
            .filter(|origin| !origin.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        Self::resolve(&base, &origin)
    }

    /// Reads `.env` (without overriding the process environment), then the
    /// environment, then the given overrides.
    pub fn from_env(
        base_override: Option<&str>,
        origin_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            engine_info!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            base_override,
            origin_override,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn analyze_endpoint(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    pub fn health_endpoint(&self) -> String {
        format!("{}/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{DEFAULT_ORIGIN}{DEFAULT_API_BASE_URL}"),
        }
    }
}

fn parse_origin(origin: &str) -> Result<Url, ConfigError> {
    Url::parse(origin.trim()).map_err(|source| ConfigError::InvalidOrigin {
        value: origin.to_string(),
        source,
    })
}
