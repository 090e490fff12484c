//! Reusable Dioxus RSX components for the calculator page.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod number_field;
mod result_field;
mod selectors;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use number_field::NumberField;
pub use result_field::{CalculateButton, ResultField};
pub use selectors::{BuildingTypeSelector, HeatSourceSelector};
