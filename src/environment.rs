use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Default API root of a locally running billionaires service.
pub const LOCAL_API_URL: &str = "http://localhost:5000/api";

/// Represents the service deployment the client talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Service running on this machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its API root.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API root URL, without a trailing slash.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid API URL '{0}': expected 'local' or an http(s):// URL")]
pub struct InvalidEnvironment(pub String);

impl FromStr for Environment {
    type Err = InvalidEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(InvalidEnvironment(s.to_string()))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_keyword_case_insensitively() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
    }

    #[test]
    fn custom_url_drops_trailing_slash() {
        let env: Environment = "https://example.org/api/".parse().unwrap();
        assert_eq!(env.api_url(), "https://example.org/api");
    }

    #[test]
    fn rejects_values_without_scheme() {
        assert!("example.org".parse::<Environment>().is_err());
    }
}
