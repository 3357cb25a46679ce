//! HTTP client implementation for the Kagi API
//!
//! [`Kagi`] exposes one async method per endpoint. Requests are built from
//! [`Settings`] and call options, sent through an [`HttpClient`], and their
//! outcome normalized by the [`RequestExecutor`].

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod config_builder;
pub mod constants;
pub mod executor;
pub mod http;
pub mod input;
pub mod utils;

pub use client::{Kagi, PreparedRequest};
pub use config::{ApiVersion, Settings};
pub use config_builder::SettingsBuilder;
pub use executor::RequestExecutor;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use input::SummaryInput;
