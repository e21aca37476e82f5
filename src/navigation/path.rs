use crate::error::{Result, RouterError};

/// Normalize a route path
///
/// - Leading `/` is added when missing, an empty path becomes `/`
/// - Trailing slashes are removed (except for the root)
/// - Query strings (`?...`) and fragments (`#...`) are stripped
/// - Empty segments (`/a//b`) and whitespace are rejected
///
/// # Examples
/// ```
/// use viewroute::navigation::path::normalize;
///
/// assert_eq!(normalize("settings/").unwrap(), "/settings");
/// assert_eq!(normalize("").unwrap(), "/");
/// assert_eq!(normalize("/rss?page=2#top").unwrap(), "/rss");
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    // Drop query string and fragment, routes only match on the path part
    let path_part = match trimmed.find(['?', '#']) {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };

    if path_part.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(raw, "path must not contain whitespace"));
    }

    let body = path_part.trim_start_matches('/').trim_end_matches('/');
    if body.is_empty() {
        return Ok("/".to_string());
    }

    if body.split('/').any(str::is_empty) {
        return Err(invalid(raw, "path must not contain empty segments"));
    }

    Ok(format!("/{}", body))
}

fn invalid(path: &str, reason: &str) -> RouterError {
    RouterError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_variants() {
        assert_eq!(normalize("/").unwrap(), "/");
        assert_eq!(normalize("").unwrap(), "/");
        assert_eq!(normalize("  ").unwrap(), "/");
        assert_eq!(normalize("///").unwrap(), "/");
    }

    #[test]
    fn test_leading_and_trailing_slashes() {
        assert_eq!(normalize("dashboard").unwrap(), "/dashboard");
        assert_eq!(normalize("/dashboard/").unwrap(), "/dashboard");
        assert_eq!(normalize("//dashboard//").unwrap(), "/dashboard");
        assert_eq!(normalize("/team/members").unwrap(), "/team/members");
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        assert_eq!(normalize("/rss?page=2").unwrap(), "/rss");
        assert_eq!(normalize("/rss#latest").unwrap(), "/rss");
        assert_eq!(normalize("/?tab=1").unwrap(), "/");
    }

    #[test]
    fn test_rejects_malformed_paths() {
        assert!(matches!(
            normalize("/a//b"),
            Err(RouterError::InvalidPath { .. })
        ));
        assert!(matches!(
            normalize("/my settings"),
            Err(RouterError::InvalidPath { .. })
        ));
    }
}
