use crate::client::{HttpHost, RestClient};
use crate::config::{EndpointSettings, URIS_SETTING};
use crate::errors::CoreError;

/// Builds the default wire client from configured endpoints.
///
/// Runs only under the container-level "no client registered yet"
/// precondition; the resolver itself only decides which endpoint list to use
/// and turns it into a fully constructed client.
#[derive(Debug, Clone)]
pub struct ClientResolver {
    settings: EndpointSettings,
}

impl ClientResolver {
    /// Create a resolver over the given endpoint settings
    pub fn new(settings: EndpointSettings) -> Self {
        Self { settings }
    }

    /// Pick the endpoint list to use.
    ///
    /// A non-empty preferred list wins outright and the deprecated list is
    /// never consulted. Otherwise a non-empty deprecated list is used. With
    /// both empty there is nothing to connect to, which is fatal.
    pub fn resolve_uris(&self) -> Result<&[String], CoreError> {
        if !self.settings.uris.is_empty() {
            Ok(&self.settings.uris)
        } else if !self.settings.deprecated_uris.is_empty() {
            Ok(&self.settings.deprecated_uris)
        } else {
            Err(CoreError::configuration(format!(
                "setting '{}' is not set and the deprecated fallback is empty",
                URIS_SETTING
            )))
        }
    }

    /// Resolve the endpoints and construct the client.
    ///
    /// All endpoint strings are parsed before anything is built, so the
    /// returned handle is complete or the whole step fails.
    pub fn resolve_client(&self) -> Result<RestClient, CoreError> {
        let uris = self.resolve_uris()?;

        tracing::info!("creating default rest client with endpoints {:?}", uris);

        let hosts = uris
            .iter()
            .map(|uri| HttpHost::parse(uri))
            .collect::<Result<Vec<_>, _>>()?;

        RestClient::builder().hosts(hosts).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uris(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_preferred_list_wins_regardless_of_deprecated_content() {
        let resolver = ClientResolver::new(EndpointSettings::new(
            uris(&["http://es1:9200", "http://es2:9200"]),
            uris(&["http://ignored:9200"]),
        ));

        let resolved = resolver.resolve_uris().unwrap();
        assert_eq!(resolved, uris(&["http://es1:9200", "http://es2:9200"]));
    }

    #[test]
    fn test_deprecated_list_is_the_fallback() {
        let resolver = ClientResolver::new(EndpointSettings::new(
            vec![],
            uris(&["http://legacy:9200"]),
        ));

        let resolved = resolver.resolve_uris().unwrap();
        assert_eq!(resolved, uris(&["http://legacy:9200"]));
    }

    #[test]
    fn test_both_lists_empty_is_fatal_and_names_the_setting() {
        let resolver = ClientResolver::new(EndpointSettings::new(vec![], vec![]));

        let err = resolver.resolve_uris().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains(URIS_SETTING));
    }

    #[test]
    fn test_resolve_client_preserves_endpoint_order() {
        let resolver = ClientResolver::new(EndpointSettings::new(
            uris(&["http://es1:9200", "https://es2:9243"]),
            vec![],
        ));

        let client = resolver.resolve_client().unwrap();
        let addresses: Vec<String> = client.hosts().iter().map(HttpHost::address).collect();
        assert_eq!(addresses, vec!["http://es1:9200", "https://es2:9243"]);
    }

    #[test]
    fn test_resolve_client_fails_on_any_malformed_endpoint() {
        let resolver = ClientResolver::new(EndpointSettings::new(
            uris(&["http://es1:9200", "http://[broken"]),
            vec![],
        ));

        let err = resolver.resolve_client().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_default_settings_fall_back_to_localhost() {
        let resolver = ClientResolver::new(EndpointSettings::default());

        let client = resolver.resolve_client().unwrap();
        assert_eq!(client.hosts()[0].address(), "http://localhost:9200");
    }
}
