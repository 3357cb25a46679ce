//! Core types used throughout the Kagi client

pub mod http;
pub mod options;
pub mod params;
pub mod response;
