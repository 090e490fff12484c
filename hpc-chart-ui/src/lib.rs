//! Shared Dioxus components and browser glue for the heat-pump calculator.
//!
//! This crate provides:
//! - `js_bridge`: Chart.js loading and the `ChartJsBackend` behind the chart registry
//! - `fetch`: a `Transport` over the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `dispatch`: applying a flow's outcome to the page
//! - `components`: Reusable RSX components (inputs, selectors, canvases, etc.)

pub mod components;
pub mod dispatch;
pub mod fetch;
pub mod js_bridge;
pub mod state;
