use std::env;

/// Environment variable the backend base URL is read from.
pub const API_URL_ENV: &str = "MICROCOPY_API_URL";

/// Default backend when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolve the backend base URL.
///
/// Precedence: an explicit value passed by the composing application, then
/// `MICROCOPY_API_URL`, then the localhost default. The client tolerates a
/// trailing slash on whatever comes out of here.
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }
    match env::var(API_URL_ENV) {
        Ok(url) if !url.is_empty() => url,
        _ => DEFAULT_API_URL.to_string(),
    }
}
