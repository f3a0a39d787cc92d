use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// The transport failure kind, if this is a transport error.
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Error::Transport(e) => Some(e.kind()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connection,
    Status(u16),
    Request,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Timeout => write!(f, "request timed out"),
            TransportErrorKind::Connection => write!(f, "connection failed"),
            TransportErrorKind::Status(code) => write!(f, "HTTP status {code}"),
            TransportErrorKind::Request => write!(f, "request failed"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{kind} ({url})")]
pub struct TransportError {
    kind: TransportErrorKind,
    url: String,
    #[source]
    source: reqwest::Error,
}

impl TransportError {
    pub fn new(url: &str, source: reqwest::Error) -> Self {
        let kind = if source.is_timeout() {
            TransportErrorKind::Timeout
        } else if let Some(status) = source.status() {
            TransportErrorKind::Status(status.as_u16())
        } else if source.is_connect() {
            TransportErrorKind::Connection
        } else {
            TransportErrorKind::Request
        };

        Self {
            kind,
            url: url.into(),
            source,
        }
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            TransportErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("unexpected {endpoint} payload: {source}")]
pub struct MappingError {
    endpoint: String,
    #[source]
    source: serde_json::Error,
}

impl MappingError {
    pub fn new(endpoint: &str, source: serde_json::Error) -> Self {
        Self {
            endpoint: endpoint.trim_start_matches('/').into(),
            source,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid base url {0:?}: must start with http:// or https://")]
    BaseUrl(String),

    #[error("invalid proxy {url:?}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid header {name:?}")]
    Header { name: String },

    #[error("invalid value {value:?} for {var}")]
    EnvVar { var: &'static str, value: String },

    #[error("failed to build http client: {0}")]
    Http(#[source] reqwest::Error),

    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_transport_kind_display() {
        assert_eq!(TransportErrorKind::Timeout.to_string(), "request timed out");
        assert_eq!(TransportErrorKind::Status(503).to_string(), "HTTP status 503");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::EnvVar {
            var: "FUTBIN_TIMEOUT",
            value: "soon".into(),
        };
        assert_eq!(err.to_string(), "invalid value \"soon\" for FUTBIN_TIMEOUT");

        let err = Error::from(ConfigError::BaseUrl("ftp://x".into()));
        assert!(err.transport_kind().is_none());
        assert!(err.to_string().contains("ftp://x"));
    }

    #[test]
    fn test_mapping_error_keeps_endpoint() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = MappingError::new("/getPopularPlayers", source);
        assert_eq!(err.endpoint(), "getPopularPlayers");
        assert!(err.to_string().starts_with("unexpected getPopularPlayers payload"));
    }
}
