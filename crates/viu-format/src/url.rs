//! URL display helpers.

/// Prepends `https://` when the URL carries no HTTP protocol. Empty
/// input comes back empty.
pub fn ensure_protocol(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Extracts the host from a URL, dropping protocol, credentials, port,
/// path, query, and fragment.
pub fn extract_domain(url: &str) -> String {
    let with_protocol = ensure_protocol(url);
    let Some(rest) = with_protocol
        .split_once("://")
        .map(|(_, rest)| rest)
    else {
        return url.to_string();
    };
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(rest);
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    let host = host.split_once(':').map_or(host, |(h, _)| h);
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_is_added_once() {
        assert_eq!(ensure_protocol("viu.com.br"), "https://viu.com.br");
        assert_eq!(ensure_protocol("https://viu.com.br"), "https://viu.com.br");
        assert_eq!(ensure_protocol("http://viu.com.br"), "http://viu.com.br");
        assert_eq!(ensure_protocol(""), "");
    }

    #[test]
    fn domain_extraction_strips_everything_else() {
        assert_eq!(extract_domain("https://viu.com.br/projetos?page=2"), "viu.com.br");
        assert_eq!(extract_domain("cdn.viu.com.br/a.png"), "cdn.viu.com.br");
        assert_eq!(extract_domain("https://user:pw@viu.com.br:8443/x"), "viu.com.br");
    }
}
