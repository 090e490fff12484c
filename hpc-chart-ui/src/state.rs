//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge::ChartJsBackend;
use hpc_core::building::{BuildingType, HeatSource};
use hpc_core::flow::{Flow, InFlight};
use hpc_core::registry::ChartRegistry;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Shared application state for the calculator page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Annual heat demand in kWh, raw input text
    pub annual_heat_kwh: Signal<String>,
    /// Selected building type code ("HEF", "HMF", "GHD")
    pub building_type: Signal<String>,
    /// Heat source temperature in °C, raw input text
    pub source_temperature: Signal<String>,
    /// Heating flow temperature in °C, raw input text
    pub flow_temperature: Signal<String>,
    /// Selected heat source ("Luft", "Erdreich")
    pub heat_source: Signal<String>,
    /// Ground temperature in °C, raw input text
    pub ground_temperature: Signal<String>,
    /// Latest output text per flow
    pub outputs: Signal<HashMap<Flow, String>>,
    /// Requests in flight per flow
    pub pending: Signal<InFlight>,
    /// Live Chart.js instances, one per canvas, and their draw failures
    pub charts: Signal<ChartRegistry<ChartJsBackend>>,
    /// Page-level error (chart library loading)
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with the form's default values.
    pub fn new() -> Self {
        Self {
            annual_heat_kwh: Signal::new("15000".to_string()),
            building_type: Signal::new(BuildingType::default().code().to_string()),
            source_temperature: Signal::new("5".to_string()),
            flow_temperature: Signal::new("65".to_string()),
            heat_source: Signal::new(HeatSource::default().code().to_string()),
            ground_temperature: Signal::new("10".to_string()),
            outputs: Signal::new(HashMap::new()),
            pending: Signal::new(InFlight::default()),
            charts: Signal::new(ChartRegistry::new(ChartJsBackend)),
            error_msg: Signal::new(None),
        }
    }

    /// Whether the ground temperature input applies to the selected source.
    pub fn needs_ground_temperature(&self) -> bool {
        (self.heat_source)()
            .parse::<HeatSource>()
            .map(|h| h.needs_ground_temperature())
            .unwrap_or(false)
    }

    pub fn output(&self, flow: Flow) -> Option<String> {
        self.outputs.read().get(&flow).cloned()
    }

    pub fn is_pending(&self, flow: Flow) -> bool {
        self.pending.read().is_pending(flow)
    }

    /// One message per canvas whose last chart could not be drawn.
    pub fn chart_errors(&self) -> Vec<String> {
        self.charts
            .read()
            .failures()
            .map(|(_, reason)| format!("Diagramm konnte nicht gezeichnet werden: {reason}"))
            .collect()
    }
}
