//! Presenting backend replies.
//!
//! Each flow turns `Result<Response, InvokeError>` into a [`FlowOutcome`]:
//! text for the flow's output field and, for charting flows, a [`ChartSpec`].
//! A backend-reported error is shown verbatim and suppresses the chart; every
//! other failure is logged and replaced by [`GENERIC_FAILURE`].

use crate::chart::{AxisSide, ChartSpec, Series};
use crate::error::InvokeError;
use crate::response::{
    AnnualLoadResponse, CopResponse, CopYearlyResponse, HeatGenResponse, StrombedarfResponse,
};
use crate::registry::ChartUpdate;
use crate::route::Route;
use crate::time_label::format_time_labels;
use log::error;
use std::collections::HashMap;

pub const GENERIC_FAILURE: &str = "Berechnung fehlgeschlagen. Bitte später erneut versuchen.";

const BLUE: &str = "blue";
const GREEN: &str = "green";
const RED: &str = "red";
const PURPLE: &str = "purple";

/// The five user-triggered calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    AnnualLoad,
    Cop,
    HeatGen,
    CopYearly,
    Strombedarf,
}

impl Flow {
    pub const ALL: [Flow; 5] = [
        Flow::AnnualLoad,
        Flow::Cop,
        Flow::HeatGen,
        Flow::CopYearly,
        Flow::Strombedarf,
    ];

    pub fn route(&self) -> Route {
        match self {
            Flow::AnnualLoad => Route::Calculate,
            Flow::Cop => Route::Cop,
            Flow::HeatGen => Route::HeatGen,
            Flow::CopYearly => Route::CopYearly,
            Flow::Strombedarf => Route::Strombedarf,
        }
    }

    /// DOM id of the canvas this flow draws on, if it draws at all.
    pub fn canvas_id(&self) -> Option<&'static str> {
        match self {
            Flow::AnnualLoad => Some("load-chart"),
            Flow::Cop => None,
            Flow::HeatGen => Some("heatgen-chart"),
            Flow::CopYearly => Some("cop-yearly-chart"),
            Flow::Strombedarf => Some("strombedarf-chart"),
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Flow::AnnualLoad => "Lastgang berechnen",
            Flow::Cop => "COP berechnen",
            Flow::HeatGen => "Wärmeerzeuger auslegen",
            Flow::CopYearly => "COP-Jahresverlauf berechnen",
            Flow::Strombedarf => "Strombedarf berechnen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowOutcome {
    pub message: Option<String>,
    pub chart: Option<ChartSpec>,
    /// The request failed; `message` explains why.
    pub failed: bool,
}

impl FlowOutcome {
    fn message(text: String) -> Self {
        Self {
            message: Some(text),
            ..Self::default()
        }
    }

    fn chart(spec: ChartSpec) -> Self {
        Self {
            chart: Some(spec),
            ..Self::default()
        }
    }

    fn failure(text: String) -> Self {
        Self {
            message: Some(text),
            chart: None,
            failed: true,
        }
    }

    /// What this outcome does to the flow's canvas. A failure leaves the
    /// previous chart alone; a success without a chart empties the canvas.
    pub fn chart_update(&self) -> ChartUpdate<'_> {
        match (&self.chart, self.failed) {
            (Some(spec), _) => ChartUpdate::Draw(spec),
            (None, false) => ChartUpdate::Clear,
            (None, true) => ChartUpdate::Keep,
        }
    }
}

/// Requests sent but not yet answered, counted per flow.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    counts: HashMap<Flow, usize>,
}

impl InFlight {
    pub fn start(&mut self, flow: Flow) {
        *self.counts.entry(flow).or_insert(0) += 1;
    }

    pub fn finish(&mut self, flow: Flow) {
        if let Some(count) = self.counts.get_mut(&flow) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&flow);
            }
        }
    }

    pub fn is_pending(&self, flow: Flow) -> bool {
        self.counts.contains_key(&flow)
    }
}

fn present<R>(
    flow: Flow,
    result: Result<R, InvokeError>,
    on_success: impl FnOnce(R) -> FlowOutcome,
) -> FlowOutcome {
    match result {
        Ok(response) => on_success(response),
        Err(InvokeError::Backend(message)) => FlowOutcome::failure(message),
        Err(err) => {
            error!("{} failed: {}", flow.route(), err);
            FlowOutcome::failure(GENERIC_FAILURE.to_string())
        }
    }
}

/// Labels for a chart: formatted time steps, or 1-based indices when the
/// backend sent none.
fn labels_for(time_steps: &[String], len: usize) -> Vec<String> {
    if time_steps.is_empty() {
        (1..=len).map(|i| i.to_string()).collect()
    } else {
        format_time_labels(time_steps)
    }
}

pub fn present_annual_load(result: Result<AnnualLoadResponse, InvokeError>) -> FlowOutcome {
    present(Flow::AnnualLoad, result, |resp| {
        FlowOutcome::chart(
            ChartSpec::new(labels_for(&resp.time_steps, resp.heat_load_kw.len()))
                .with_series(Series::new(
                    "Gesamtlast Gebäude (kW)",
                    resp.heat_load_kw,
                    BLUE,
                    AxisSide::Primary,
                ))
                .with_series(Series::new(
                    "Lufttemperatur (°C)",
                    resp.hourly_temperatures,
                    GREEN,
                    AxisSide::Secondary,
                ))
                .with_axis_titles("Wärmebedarf in kW", Some("Temperatur in °C")),
        )
    })
}

pub fn present_cop(result: Result<CopResponse, InvokeError>) -> FlowOutcome {
    present(Flow::Cop, result, |resp| {
        FlowOutcome::message(format!("{:.2}", resp.cop))
    })
}

pub fn present_heat_gen(result: Result<HeatGenResponse, InvokeError>) -> FlowOutcome {
    present(Flow::HeatGen, result, |resp| {
        let cop = resp
            .cop
            .mean()
            .map(|c| format!("{c:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let message = format!(
            "COP: {}, Stromverbrauch: {:.2} kWh",
            cop,
            resp.electricity.total()
        );

        let chart = resp.cop.series().map(|cop_series| {
            let mut spec = ChartSpec::new(labels_for(&resp.time_steps, cop_series.len()))
                .with_series(Series::new("COP", cop_series.to_vec(), PURPLE, AxisSide::Primary));
            if let Some(power) = resp.electricity.series() {
                spec = spec.with_series(Series::new(
                    "Stromverbrauch (kW)",
                    power.to_vec(),
                    RED,
                    AxisSide::Secondary,
                ));
            }
            spec.with_axis_titles("COP", Some("Stromverbrauch in kW"))
        });

        FlowOutcome {
            message: Some(message),
            chart,
            failed: false,
        }
    })
}

pub fn present_cop_yearly(result: Result<CopYearlyResponse, InvokeError>) -> FlowOutcome {
    present(Flow::CopYearly, result, |resp| {
        FlowOutcome::chart(
            ChartSpec::new(labels_for(&resp.time_steps, resp.cop.len()))
                .with_series(Series::new("COP", resp.cop, PURPLE, AxisSide::Primary))
                .with_series(Series::new(
                    "Temperatur (°C)",
                    resp.hourly_temperatures,
                    GREEN,
                    AxisSide::Secondary,
                ))
                .with_axis_titles("COP", Some("Temperatur in °C")),
        )
    })
}

/// Annual electricity demand in kWh and seasonal performance factor of an
/// hourly demand series.
pub fn annual_summary(resp: &StrombedarfResponse) -> (f64, Option<f64>) {
    let electricity_kwh: f64 = resp.electricity_kw.iter().sum();
    let heat_kwh: f64 = resp.heat_load_kw.iter().sum();
    let jaz = (electricity_kwh > 0.0).then(|| heat_kwh / electricity_kwh);
    (electricity_kwh, jaz)
}

pub fn present_strombedarf(result: Result<StrombedarfResponse, InvokeError>) -> FlowOutcome {
    present(Flow::Strombedarf, result, |resp| {
        let (electricity_kwh, jaz) = annual_summary(&resp);
        let mut message =
            format!("Jährlicher Stromverbrauch der Wärmepumpe: {electricity_kwh:.2} kWh");
        if let Some(jaz) = jaz {
            message.push_str(&format!(", Jahresarbeitszahl: {jaz:.2}"));
        }

        let spec = ChartSpec::new(labels_for(&resp.time_steps, resp.heat_load_kw.len()))
            .with_series(Series::new(
                "Gesamtlast Gebäude (kW)",
                resp.heat_load_kw,
                BLUE,
                AxisSide::Primary,
            ))
            .with_series(Series::new(
                "Strombedarf Wärmepumpe (kW)",
                resp.electricity_kw,
                RED,
                AxisSide::Primary,
            ))
            .with_axis_titles("Wärmebedarf, Stromverbrauch in kW", None);

        FlowOutcome {
            message: Some(message),
            chart: Some(spec),
            failed: false,
        }
    })
}
