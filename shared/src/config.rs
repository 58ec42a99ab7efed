use url::Url;

/// Address of the prediction API when nothing overrides it.
pub const DEFAULT_API_BASE: &str = "http://172.20.10.5:8000";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base {raw:?}: {source}")]
    InvalidUrl { raw: String, source: url::ParseError },
    #[error("API base must be http or https, got {0:?}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ImagePredict,
    TabularPredict,
    Overview,
}

impl Endpoint {
    /// Path relative to the API base. Trailing slashes are required by the
    /// server's routing.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ImagePredict => "predict/image/",
            Endpoint::TabularPredict => "predict/tabular/",
            Endpoint::Overview => "api/",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_API_BASE).expect("default API base is a valid URL")
    }
}

impl ApiConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let mut base = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            raw: trimmed.to_string(),
            source,
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base.scheme().to_string()));
        }
        // Url::join replaces the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    /// Takes the first candidate that parses, skipping empty and invalid
    /// ones, and falls back to [`DEFAULT_API_BASE`].
    pub fn resolve<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        for raw in candidates.into_iter().flatten() {
            if raw.trim().is_empty() {
                continue;
            }
            match Self::parse(raw) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring API base override: {}", e),
            }
        }
        Self::default()
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        match self.base.join(endpoint.path()) {
            Ok(url) => url.into(),
            Err(_) => format!("{}{}", self.base, endpoint.path()),
        }
    }
}
