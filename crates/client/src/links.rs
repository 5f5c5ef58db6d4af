use url::Url;

/// Turn a reset link into an in-app path by dropping scheme, host and port.
///
/// `http://host/reset-password?token=abc` becomes `/reset-password?token=abc`.
/// Rooted paths pass through. Anything else (relative paths, non-http
/// schemes, protocol-relative URLs) returns `None`.
pub fn local_reset_path(link: &str) -> Option<String> {
    let link = link.trim();
    if link.starts_with('/') {
        return (!link.starts_with("//")).then(|| link.to_string());
    }

    let url = Url::parse(link).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let mut path = url.path().to_string();
    if let Some(query) = url.query() {
        path.push('?');
        path.push_str(query);
    }
    Some(path)
}
