const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Base URL of the video-generation service.
///
/// Set `BACKEND_URL` at build time to point a release bundle at another host.
pub fn get_backend_url() -> &'static str {
    resolve_backend_url(option_env!("BACKEND_URL"))
}

fn resolve_backend_url(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/'),
        _ => DEFAULT_BACKEND_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_service() {
        assert_eq!(resolve_backend_url(None), "http://localhost:8000");
        assert_eq!(resolve_backend_url(Some("  ")), "http://localhost:8000");
    }

    #[test]
    fn strips_trailing_slash_from_override() {
        assert_eq!(
            resolve_backend_url(Some("https://api.piyx.ai/")),
            "https://api.piyx.ai"
        );
    }

    #[test]
    fn trims_whitespace_around_override() {
        assert_eq!(
            resolve_backend_url(Some("  https://api.piyx.ai/ \n")),
            "https://api.piyx.ai"
        );
    }
}
