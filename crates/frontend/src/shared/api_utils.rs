//! URL helpers for the analytics API.

/// Build a full API URL from the configured base and an absolute path.
///
/// An empty base keeps the path relative so requests go to the page origin.
///
/// # Example
/// ```rust
/// use admin_dashboard::shared::api_utils::api_url;
/// assert_eq!(api_url("http://127.0.0.1:5000/", "/api/team_data"), "http://127.0.0.1:5000/api/team_data");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        assert_eq!(
            api_url("http://localhost:5000", "/api/cards_data"),
            "http://localhost:5000/api/cards_data"
        );
        assert_eq!(
            api_url("http://localhost:5000/", "/api/cards_data"),
            "http://localhost:5000/api/cards_data"
        );
        assert_eq!(
            api_url("http://localhost:5000", "api/users/4"),
            "http://localhost:5000/api/users/4"
        );
    }

    #[test]
    fn test_empty_base_stays_relative() {
        assert_eq!(api_url("", "/api/team_data"), "/api/team_data");
    }
}
