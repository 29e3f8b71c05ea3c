//! Base URL resolution.

/// Backend address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5080";

/// Resolve the base URL from an environment-provided override.
///
/// A present, non-empty value is used as given; a missing or empty one falls
/// back to [`DEFAULT_BASE_URL`]. The app passes
/// `option_env!("ECHO_API_BASE_URL")` here, which is resolved at compile time
/// the way the original build-time env var was.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    match configured {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_value_is_used() {
        assert_eq!(
            resolve_base_url(Some("http://api.example:9000")),
            "http://api.example:9000"
        );
    }

    #[test]
    fn test_missing_value_falls_back_to_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        assert_eq!(resolve_base_url(Some("")), DEFAULT_BASE_URL);
    }
}
