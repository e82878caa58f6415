use thiserror::Error;

/// Core error type for the esvolve startup wiring
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("invalid endpoint URI '{uri}': {source}")]
    InvalidEndpoint {
        uri: String,
        source: url::ParseError,
    },

    #[error("service not found: {service_type}")]
    ServiceNotFound { service_type: String },

    #[error("lock error on resource: {resource}")]
    LockError { resource: String },

    #[error("lifecycle error: {message}")]
    Lifecycle { message: String },

    #[error("initializer '{name}' failed: {source}")]
    InitializerFailed {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CoreError {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new invalid endpoint error
    pub fn invalid_endpoint(uri: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidEndpoint {
            uri: uri.into(),
            source,
        }
    }

    /// Create a new service not found error
    pub fn service_not_found(service_type: impl Into<String>) -> Self {
        Self::ServiceNotFound {
            service_type: service_type.into(),
        }
    }

    /// Create a new lifecycle error
    pub fn lifecycle(message: impl Into<String>) -> Self {
        Self::Lifecycle {
            message: message.into(),
        }
    }

    /// Check if the error is a configuration error (invalid endpoints included)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::InvalidEndpoint { .. }
        )
    }

    /// Check if the error is a service lookup error
    pub fn is_service(&self) -> bool {
        matches!(self, Self::ServiceNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_classification() {
        let err = CoreError::configuration("setting 'esvolve.uris' is not set");
        assert!(err.is_configuration());
        assert!(!err.is_service());
        assert!(err.to_string().contains("esvolve.uris"));
    }

    #[test]
    fn test_invalid_endpoint_counts_as_configuration() {
        let parse_err = url::Url::parse("::not-a-uri::").unwrap_err();
        let err = CoreError::invalid_endpoint("::not-a-uri::", parse_err);
        assert!(err.is_configuration());
        assert!(err.to_string().contains("::not-a-uri::"));
    }
}
