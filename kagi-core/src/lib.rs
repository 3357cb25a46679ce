//! Core types and errors for the Kagi API client
//!
//! This crate holds the transport-independent data model: parameter maps,
//! per-endpoint options, request/response descriptors, the response envelope
//! and the error type shared by every call.

#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{BoxError, Error, Result};
pub use types::{
    http::{HttpMethod, RawResponse, RequestDescriptor},
    options::{EnrichType, Engine, FastGptOptions, SearchOptions, SummarizeOptions, SummaryType},
    params::Params,
    response::{
        ApiErrorDescriptor, ApiResponse, ErrorDetail, FastGptData, Meta, Reference, SearchObject,
        SearchObjectKind, SummarizeData, Thumbnail,
    },
};
