use crate::client::HttpHost;
use crate::errors::CoreError;

/// Long-lived handle on a cluster connection pool.
///
/// Construction is all-or-nothing: a handle either carries the full ordered
/// node list or is never handed out. Transport concerns (pooling, retries,
/// timeouts) live behind this handle and are not part of the wiring layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestClient {
    hosts: Vec<HttpHost>,
}

impl RestClient {
    /// Start building a client
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::new()
    }

    /// Cluster nodes this client targets, in configuration order
    pub fn hosts(&self) -> &[HttpHost] {
        &self.hosts
    }

    /// Number of configured cluster nodes
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }
}

/// Builder for [`RestClient`]
#[derive(Debug, Default)]
pub struct RestClientBuilder {
    hosts: Vec<HttpHost>,
}

impl RestClientBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single cluster node
    pub fn host(mut self, host: HttpHost) -> Self {
        self.hosts.push(host);
        self
    }

    /// Add cluster nodes, preserving order
    pub fn hosts(mut self, hosts: impl IntoIterator<Item = HttpHost>) -> Self {
        self.hosts.extend(hosts);
        self
    }

    /// Build the client, failing when no node was configured
    pub fn build(self) -> Result<RestClient, CoreError> {
        if self.hosts.is_empty() {
            return Err(CoreError::configuration(
                "rest client requires at least one cluster endpoint",
            ));
        }
        Ok(RestClient { hosts: self.hosts })
    }
}
