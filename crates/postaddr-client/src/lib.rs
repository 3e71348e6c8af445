//! postaddr Client - consumer-facing address API
//!
//! [`AddressClient`] ties the metadata cache, the verifier tree and the
//! format interpreter together behind the operations a form needs.
//! [`HttpRequest`] reaches the metadata service over HTTP.

pub mod client;
pub mod http;

pub use client::{AddressClient, RegionData};
pub use http::HttpRequest;
