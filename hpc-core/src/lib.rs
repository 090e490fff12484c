//! Platform-neutral core of the heat-pump calculator frontends.
//!
//! This crate provides:
//! - `route`, `request`, `response`: the five backend calculations and their wire types
//! - `client`: the generic `invoke` dispatcher over a `Transport`
//! - `flow`: turning a backend reply into output text and a chart
//! - `chart`, `registry`: renderer-neutral chart specs and the per-canvas chart registry
//!
//! With the `api` feature, `http` adds a native `reqwest` transport for the CLI.

pub mod building;
pub mod chart;
pub mod client;
pub mod error;
pub mod flow;
#[cfg(feature = "api")]
pub mod http;
pub mod registry;
pub mod request;
pub mod response;
pub mod route;
pub mod time_label;

pub use client::{invoke, RawReply, Transport};
pub use error::InvokeError;
