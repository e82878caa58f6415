use std::env;

/// Canonical name of the preferred endpoint setting, used in error messages.
pub const URIS_SETTING: &str = "esvolve.uris";

/// Canonical name of the deprecated endpoint setting.
pub const DEPRECATED_URIS_SETTING: &str = "esvolve.rest.uris";

/// Environment variable backing [`URIS_SETTING`].
pub const URIS_ENV: &str = "ESVOLVE_URIS";

/// Environment variable backing [`DEPRECATED_URIS_SETTING`].
pub const DEPRECATED_URIS_ENV: &str = "ESVOLVE_REST_URIS";

/// Conventional single-node endpoint, applied only on the deprecated path.
pub const LEGACY_DEFAULT_URI: &str = "http://localhost:9200";

/// Cluster endpoint settings with their two independent sources.
///
/// `uris` is the preferred setting and wins whenever it is non-empty.
/// `deprecated_uris` is the legacy fallback; it carries the conventional
/// `http://localhost:9200` default, so an entirely unconfigured process still
/// reaches a local cluster through the legacy path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSettings {
    pub uris: Vec<String>,
    pub deprecated_uris: Vec<String>,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            uris: Vec::new(),
            deprecated_uris: vec![LEGACY_DEFAULT_URI.to_string()],
        }
    }
}

impl EndpointSettings {
    /// Create settings from explicit endpoint lists
    pub fn new(uris: Vec<String>, deprecated_uris: Vec<String>) -> Self {
        Self {
            uris,
            deprecated_uris,
        }
    }

    /// Load settings from environment variables
    ///
    /// Both variables hold comma-separated URI lists. An unset preferred
    /// variable yields an empty list; an unset deprecated variable yields the
    /// legacy localhost default.
    pub fn from_env() -> Self {
        let uris = env::var(URIS_ENV)
            .map(|value| split_uri_list(&value))
            .unwrap_or_default();

        let deprecated_uris = env::var(DEPRECATED_URIS_ENV)
            .map(|value| split_uri_list(&value))
            .unwrap_or_else(|_| vec![LEGACY_DEFAULT_URI.to_string()]);

        Self {
            uris,
            deprecated_uris,
        }
    }
}

fn split_uri_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_seeds_only_the_deprecated_path() {
        let settings = EndpointSettings::default();
        assert!(settings.uris.is_empty());
        assert_eq!(settings.deprecated_uris, vec![LEGACY_DEFAULT_URI]);
    }

    #[test]
    fn test_split_uri_list_trims_and_drops_empty_entries() {
        let entries = split_uri_list(" http://es1:9200 , ,http://es2:9200,");
        assert_eq!(entries, vec!["http://es1:9200", "http://es2:9200"]);

        assert!(split_uri_list("").is_empty());
        assert!(split_uri_list(" , ").is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_both_variables() {
        env::set_var(URIS_ENV, "http://es1:9200,http://es2:9200");
        env::set_var(DEPRECATED_URIS_ENV, "http://legacy:9200");

        let settings = EndpointSettings::from_env();
        assert_eq!(settings.uris, vec!["http://es1:9200", "http://es2:9200"]);
        assert_eq!(settings.deprecated_uris, vec!["http://legacy:9200"]);

        env::remove_var(URIS_ENV);
        env::remove_var(DEPRECATED_URIS_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        env::remove_var(URIS_ENV);
        env::remove_var(DEPRECATED_URIS_ENV);

        let settings = EndpointSettings::from_env();
        assert!(settings.uris.is_empty());
        assert_eq!(settings.deprecated_uris, vec![LEGACY_DEFAULT_URI]);
    }

    #[test]
    #[serial]
    fn test_from_env_allows_explicitly_empty_deprecated_list() {
        env::remove_var(URIS_ENV);
        env::set_var(DEPRECATED_URIS_ENV, "");

        let settings = EndpointSettings::from_env();
        assert!(settings.uris.is_empty());
        assert!(settings.deprecated_uris.is_empty());

        env::remove_var(DEPRECATED_URIS_ENV);
    }
}
