//! API utilities for frontend-backend communication
//!
//! The backend base URL is fixed at build time from `NAVKAR_API_URL`
//! (for example `NAVKAR_API_URL=https://api.navkar.in/api trunk build`).

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the REST backend lives; injected into the HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("NAVKAR_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.api_url("/products");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Percent-encodes one path segment (ids coming from route params)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://api.example.com/api/");
        assert_eq!(config.base_url(), "https://api.example.com/api");
        assert_eq!(config.api_url("/products"), "https://api.example.com/api/products");
        assert_eq!(config.api_url("quotations"), "https://api.example.com/api/quotations");
    }

    #[test]
    fn test_blank_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_URL);
        assert_eq!(ApiConfig::default().api_url("/products"), "http://localhost:5000/api/products");
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(path_segment("64f0a1"), "64f0a1");
    }
}
