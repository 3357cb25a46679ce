//! A typed async client for the Kagi search and AI API
//!
//! This crate re-exports [`kagi_core`] and [`kagi_client`] so most users only
//! need a single dependency.
//!
//! ```no_run
//! use kagi::{EnrichType, Kagi, SearchOptions, Settings};
//!
//! # async fn example() -> Result<(), kagi::Error> {
//! let kagi = Kagi::new(Settings::new("your-api-token"))?;
//!
//! let results = kagi.search("rust async runtimes", SearchOptions::new().limit(5)).await?;
//! for item in results.data {
//!     println!("{:?}", item.title);
//! }
//!
//! let news = kagi.enrich("rust", EnrichType::News).await?;
//! println!("{} news items", news.data.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use kagi_client::{
    ApiVersion, HttpClient, HttpResponse, Kagi, PreparedRequest, ReqwestClient, RequestExecutor,
    Settings, SettingsBuilder, SummaryInput,
};
pub use kagi_core::*;

/// Lower-level building blocks
pub mod client {
    pub use kagi_client::*;
}
