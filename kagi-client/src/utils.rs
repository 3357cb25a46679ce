//! URL helpers shared by the endpoint methods

use crate::config::ApiVersion;

/// Join the base URL, version and path segments, appending `query` when it
/// is non-empty
pub fn endpoint_url(base_url: &str, version: ApiVersion, path: &[&str], query: &str) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), version);
    for segment in path {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}
