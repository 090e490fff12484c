//! Heat-pump calculator
//!
//! Single page with five calculations, each bound to one button:
//! annual building load, instantaneous COP, heat generator sizing,
//! yearly COP and heat-pump electricity demand.
//!
//! Data flow:
//! 1. On mount: inject Chart.js and wait for `window.Chart`.
//! 2. On click: read the form signals, POST them to the backend route
//!    (same origin) without blocking the UI.
//! 3. On reply: show the flow's output text; redraw its canvas through the
//!    chart registry, which destroys the previous chart first.

use dioxus::prelude::*;
use hpc_chart_ui::components::{
    BuildingTypeSelector, CalculateButton, ChartContainer, ChartHeader, ErrorDisplay,
    HeatSourceSelector, LoadingSpinner, NumberField, ResultField,
};
use hpc_chart_ui::dispatch::run_flow;
use hpc_chart_ui::js_bridge;
use hpc_chart_ui::state::AppState;
use hpc_core::flow::{self, Flow};
use hpc_core::request::{
    AnnualLoadRequest, CopRequest, CopYearlyRequest, HeatGenRequest, StrombedarfRequest,
};

/// How long to wait for the Chart.js CDN before giving up.
const CHART_LIBRARY_TIMEOUT_MS: u32 = 15_000;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hpc-root"))
        .launch(App);
}

fn calculate_load(state: AppState) {
    let request = AnnualLoadRequest {
        annual_heat_kwh: (state.annual_heat_kwh)(),
        building_type: (state.building_type)(),
    };
    run_flow(state, Flow::AnnualLoad, request, flow::present_annual_load);
}

fn calculate_cop(state: AppState) {
    let request = CopRequest {
        source_temperature: (state.source_temperature)(),
        flow_temperature: (state.flow_temperature)(),
    };
    run_flow(state, Flow::Cop, request, flow::present_cop);
}

fn calculate_heat_gen(state: AppState) {
    let request = HeatGenRequest {
        flow_temperature: (state.flow_temperature)(),
        heat_source: (state.heat_source)(),
        ground_temperature: (state.ground_temperature)(),
    };
    run_flow(state, Flow::HeatGen, request, flow::present_heat_gen);
}

fn calculate_cop_yearly(state: AppState) {
    let request = CopYearlyRequest {
        flow_temperature: (state.flow_temperature)(),
        heat_source: (state.heat_source)(),
        ground_temperature: (state.ground_temperature)(),
    };
    run_flow(state, Flow::CopYearly, request, flow::present_cop_yearly);
}

fn calculate_strombedarf(state: AppState) {
    let request = StrombedarfRequest {
        annual_heat_kwh: (state.annual_heat_kwh)(),
        building_type: (state.building_type)(),
        flow_temperature: (state.flow_temperature)(),
        heat_source: (state.heat_source)(),
        ground_temperature: (state.ground_temperature)(),
    };
    run_flow(state, Flow::Strombedarf, request, flow::present_strombedarf);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut charts_loading = use_signal(|| true);

    // ─── Load Chart.js once on mount ───
    use_future(move || async move {
        js_bridge::load_chart_library();
        if !js_bridge::wait_for_chart_library(CHART_LIBRARY_TIMEOUT_MS).await {
            state.error_msg.set(Some(
                "Diagrammbibliothek konnte nicht geladen werden.".to_string(),
            ));
        }
        charts_loading.set(false);
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { "Wärmepumpen-Rechner" }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }
            for message in state.chart_errors() {
                ErrorDisplay { message }
            }

            if charts_loading() {
                LoadingSpinner {}
            }

            InputSection {}
            LoadSection {}
            CopSection {}
            HeatGenSection {}
            CopYearlySection {}
            StrombedarfSection {}
        }
    }
}

/// Form inputs shared by the flows.
#[component]
fn InputSection() -> Element {
    let state = use_context::<AppState>();
    let show_ground = state.needs_ground_temperature();

    rsx! {
        div {
            style: "padding-bottom: 8px; border-bottom: 1px solid #e0e0e0;",
            NumberField {
                id: "JEB_Wärme_ges_kWh".to_string(),
                label: "Jahreswärmebedarf in kWh".to_string(),
                value: state.annual_heat_kwh,
                tooltip: "Geben Sie den Jahreswärmebedarf in kWh ein.".to_string(),
            }
            BuildingTypeSelector {}
            NumberField {
                id: "quelltemperatur".to_string(),
                label: "Temperatur der Quelle in °C".to_string(),
                value: state.source_temperature,
            }
            NumberField {
                id: "heiztemperatur".to_string(),
                label: "Vorlauftemperatur der Heizung in °C".to_string(),
                value: state.flow_temperature,
                tooltip: "Unterschiedlich je nach Heizungssystem.".to_string(),
            }
            HeatSourceSelector {}
            if show_ground {
                NumberField {
                    id: "erdreich_temperatur".to_string(),
                    label: "Erdreichtemperatur in °C".to_string(),
                    value: state.ground_temperature,
                }
            }
        }
    }
}

#[component]
fn LoadSection() -> Element {
    let state = use_context::<AppState>();
    let canvas_id = Flow::AnnualLoad.canvas_id().unwrap_or_default();

    rsx! {
        div {
            style: "margin-top: 16px;",
            ChartHeader {
                title: "Lastgang des Gebäudes".to_string(),
                unit_description: "links Wärmebedarf in kW, rechts Lufttemperatur in °C".to_string(),
            }
            CalculateButton { flow: Flow::AnnualLoad, onclick: move |_| calculate_load(state) }
            ResultField { flow: Flow::AnnualLoad }
            ChartContainer {
                id: canvas_id.to_string(),
                loading: state.is_pending(Flow::AnnualLoad),
            }
        }
    }
}

#[component]
fn CopSection() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "margin-top: 16px;",
            ChartHeader { title: "Effizienz der Wärmepumpe".to_string() }
            CalculateButton { flow: Flow::Cop, onclick: move |_| calculate_cop(state) }
            ResultField { flow: Flow::Cop, label: "COP:".to_string() }
        }
    }
}

#[component]
fn HeatGenSection() -> Element {
    let state = use_context::<AppState>();
    let canvas_id = Flow::HeatGen.canvas_id().unwrap_or_default();

    rsx! {
        div {
            style: "margin-top: 16px;",
            ChartHeader {
                title: "Heizungsauslegung".to_string(),
                unit_description: "links COP, rechts Stromverbrauch in kW".to_string(),
            }
            CalculateButton { flow: Flow::HeatGen, onclick: move |_| calculate_heat_gen(state) }
            ResultField { flow: Flow::HeatGen }
            ChartContainer {
                id: canvas_id.to_string(),
                loading: state.is_pending(Flow::HeatGen),
                min_height: 300,
            }
        }
    }
}

#[component]
fn CopYearlySection() -> Element {
    let state = use_context::<AppState>();
    let canvas_id = Flow::CopYearly.canvas_id().unwrap_or_default();

    rsx! {
        div {
            style: "margin-top: 16px;",
            ChartHeader {
                title: "COP-Jahresverlauf".to_string(),
                unit_description: "links COP, rechts Quelltemperatur in °C".to_string(),
            }
            CalculateButton { flow: Flow::CopYearly, onclick: move |_| calculate_cop_yearly(state) }
            ResultField { flow: Flow::CopYearly }
            ChartContainer {
                id: canvas_id.to_string(),
                loading: state.is_pending(Flow::CopYearly),
            }
        }
    }
}

#[component]
fn StrombedarfSection() -> Element {
    let state = use_context::<AppState>();
    let canvas_id = Flow::Strombedarf.canvas_id().unwrap_or_default();

    rsx! {
        div {
            style: "margin-top: 16px;",
            ChartHeader {
                title: "Strombedarf der Wärmepumpe".to_string(),
                unit_description: "Wärmebedarf und Stromverbrauch in kW".to_string(),
            }
            CalculateButton { flow: Flow::Strombedarf, onclick: move |_| calculate_strombedarf(state) }
            ResultField { flow: Flow::Strombedarf }
            ChartContainer {
                id: canvas_id.to_string(),
                loading: state.is_pending(Flow::Strombedarf),
            }
        }
    }
}
