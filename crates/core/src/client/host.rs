use crate::errors::CoreError;
use url::Url;

/// Port assumed when neither the URI nor its scheme provides one
pub const DEFAULT_PORT: u16 = 9200;

/// Structured connection target for one cluster node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpHost {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl HttpHost {
    /// Create a host descriptor from its parts
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// Parse an endpoint URI into a host descriptor
    ///
    /// Fails with a configuration error when the string is not a well-formed
    /// URI or names no host. A missing port falls back to the scheme's
    /// default, then to [`DEFAULT_PORT`] for schemes without one. An explicit
    /// port is always kept, even when it equals the scheme's default.
    pub fn parse(uri: &str) -> Result<Self, CoreError> {
        let url = Url::parse(uri).map_err(|source| CoreError::invalid_endpoint(uri, source))?;

        let host = url
            .host_str()
            .ok_or_else(|| {
                CoreError::configuration(format!("endpoint URI '{}' names no host", uri))
            })?
            .to_string();

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port: url.port_or_known_default().unwrap_or(DEFAULT_PORT),
        })
    }

    /// Render the host back into URI form
    pub fn address(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl std::fmt::Display for HttpHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_uri() {
        let host = HttpHost::parse("https://es1.internal:9243").unwrap();
        assert_eq!(host.scheme, "https");
        assert_eq!(host.host, "es1.internal");
        assert_eq!(host.port, 9243);
        assert_eq!(host.address(), "https://es1.internal:9243");
    }

    #[test]
    fn test_parse_keeps_explicit_scheme_default_ports() {
        let host = HttpHost::parse("http://es1:80").unwrap();
        assert_eq!(host.port, 80);
        assert_eq!(host.address(), "http://es1:80");

        let host = HttpHost::parse("https://es1:443").unwrap();
        assert_eq!(host.port, 443);
    }

    #[test]
    fn test_parse_missing_port_uses_scheme_default() {
        let host = HttpHost::parse("http://localhost").unwrap();
        assert_eq!(host.port, 80);

        let host = HttpHost::parse("https://localhost").unwrap();
        assert_eq!(host.port, 443);
    }

    #[test]
    fn test_parse_missing_port_on_unknown_scheme_uses_fallback() {
        let host = HttpHost::parse("esnode://data-1").unwrap();
        assert_eq!(host.port, DEFAULT_PORT);
    }

    #[test]
    fn test_parse_rejects_malformed_uri() {
        let err = HttpHost::parse("http://[broken").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_parse_rejects_uri_without_host() {
        // "localhost:9200" parses as scheme "localhost" with no host part
        let err = HttpHost::parse("localhost:9200").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("localhost:9200"));
    }
}
