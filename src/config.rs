use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BASE_PATH: &str = "/NarenP-website/";
pub const DEFAULT_EXPORT_DIR: &str = "dist";
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base path {value:?}: {reason}")]
    InvalidBasePath { value: String, reason: &'static str },
}

/// URL prefix the site is served under. Always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidBasePath {
            value: raw.to_string(),
            reason,
        };

        let trimmed = raw.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        if trimmed.contains(['?', '#']) {
            return Err(invalid("contains a query or fragment"));
        }
        if trimmed.contains('\\') {
            return Err(invalid("contains a backslash"));
        }

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid("contains a relative segment"));
        }
        // Route syntax like `:id`, `*rest` or `{id}` would turn the base into a pattern
        if !segments.iter().all(|s| s.chars().all(is_unreserved)) {
            return Err(invalid(
                "contains characters other than letters, digits, '-', '.', '_' or '~'",
            ));
        }

        if segments.is_empty() {
            Ok(Self("/".to_string()))
        } else {
            Ok(Self(format!("/{}/", segments.join("/"))))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Base path without its trailing slash, empty for the root.
    pub fn root(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    /// Absolute URL of an asset living under the base path.
    pub fn asset(&self, rel: &str) -> String {
        format!("{}{}", self.0, rel.trim_start_matches('/'))
    }
}

/// RFC 3986 unreserved characters
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl Default for BasePath {
    fn default() -> Self {
        Self(DEFAULT_BASE_PATH.to_string())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings the server and exporter read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_path: BasePath,
    pub export_dir: PathBuf,
    pub site_root: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_path = match lookup("SITE_BASE_PATH") {
            Some(raw) => BasePath::parse(&raw)?,
            None => BasePath::default(),
        };

        Ok(Self {
            base_path,
            export_dir: lookup("EXPORT_DIR")
                .unwrap_or_else(|| DEFAULT_EXPORT_DIR.into())
                .into(),
            site_root: lookup("SITE_ROOT")
                .unwrap_or_else(|| DEFAULT_SITE_ROOT.into())
                .into(),
        })
    }
}
