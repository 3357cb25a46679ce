//! Error types for the Kagi client

use crate::types::http::{RawResponse, RequestDescriptor};
use crate::types::response::ApiErrorDescriptor;
use std::error::Error as StdError;
use thiserror::Error;

/// Boxed source error
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// The main error type for all Kagi operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The API answered with a status other than 200
    #[error("HTTP {} from {url}", .response.status)]
    Transport {
        /// Request URL
        url: String,
        /// The request that was sent
        request: RequestDescriptor,
        /// Status and headers of the response
        response: RawResponse,
    },

    /// The response envelope carried an error descriptor
    #[error("API error from {url}: {}", .error.message().unwrap_or("unknown error"))]
    Api {
        /// Request URL
        url: String,
        /// The request that was sent
        request: RequestDescriptor,
        /// Status and headers of the response
        response: RawResponse,
        /// The reported error
        error: ApiErrorDescriptor,
    },

    /// A 200 response body could not be decoded
    #[error("Failed to parse response from {url}: {message}")]
    Parse {
        /// Request URL
        url: String,
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// The request could not be completed
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// Request parameters could not be encoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<BoxError>,
    },

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// HTTP status of the response, when one was received
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { response, .. } | Self::Api { response, .. } => Some(response.status),
            _ => None,
        }
    }

    /// URL of the failed request, when known
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Transport { url, .. } | Self::Api { url, .. } | Self::Parse { url, .. } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }

    /// The request that was sent, when known
    pub const fn request(&self) -> Option<&RequestDescriptor> {
        match self {
            Self::Transport { request, .. } | Self::Api { request, .. } => Some(request),
            _ => None,
        }
    }

    /// The API-reported error descriptor, for [`Error::Api`]
    pub const fn api_error(&self) -> Option<&ApiErrorDescriptor> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for Kagi operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
