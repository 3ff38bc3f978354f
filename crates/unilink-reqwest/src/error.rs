//! Transport error types for unilink-reqwest.

use thiserror::Error;

/// Transport-level error raised while talking to the backend.
#[derive(Debug, Error)]
pub(crate) enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The request path could not be joined onto the base endpoint.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<Error> for unilink_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    unilink_core::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    unilink_core::Error::network()
                        .with_message("Connection failed")
                        .with_source(e)
                } else if e.is_builder() {
                    unilink_core::Error::request_setup()
                        .with_message(e.to_string())
                        .with_source(e)
                } else {
                    unilink_core::Error::network()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Serde(e) => unilink_core::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
            Error::Url(e) => unilink_core::Error::request_setup()
                .with_message(e.to_string())
                .with_source(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use unilink_core::ErrorKind;

    use super::*;

    #[test]
    fn test_url_error_is_request_setup() {
        let err = Error::from(url::Url::parse("not a url").unwrap_err());
        let err = unilink_core::Error::from(err);
        assert_eq!(err.kind(), ErrorKind::RequestSetup);
    }

    #[test]
    fn test_serde_error_is_serialization() {
        let err = Error::from(serde_json::from_str::<u8>("nope").unwrap_err());
        let err = unilink_core::Error::from(err);
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }
}
