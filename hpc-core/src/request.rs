//! Request bodies for the five calculations.
//!
//! Every field is the raw text of a form input and is sent as a JSON string,
//! unparsed. The backend names its fields inconsistently (case, umlauts), so
//! each struct pins the exact wire names with `serde(rename)`.

use crate::response::{
    AnnualLoadResponse, CopResponse, CopYearlyResponse, HeatGenResponse, StrombedarfResponse,
};
use crate::route::Route;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A request bound to its backend route and the response it decodes into.
pub trait Calculation: Serialize {
    const ROUTE: Route;
    type Response: DeserializeOwned;
}

/// `/calculate`: annual heat load of a building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualLoadRequest {
    #[serde(rename = "JEB_Wärme_ges_kWh")]
    pub annual_heat_kwh: String,
    #[serde(rename = "building_type")]
    pub building_type: String,
}

impl Calculation for AnnualLoadRequest {
    const ROUTE: Route = Route::Calculate;
    type Response = AnnualLoadResponse;
}

/// `/calculate_cop`: COP for one source/flow temperature pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopRequest {
    #[serde(rename = "quelltemperatur")]
    pub source_temperature: String,
    #[serde(rename = "heiztemperatur")]
    pub flow_temperature: String,
}

impl Calculation for CopRequest {
    const ROUTE: Route = Route::Cop;
    type Response = CopResponse;
}

/// `/calculate_heatgen`: heat generator sizing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatGenRequest {
    #[serde(rename = "heiztemperatur")]
    pub flow_temperature: String,
    #[serde(rename = "waermequelle")]
    pub heat_source: String,
    #[serde(rename = "erdreich_temperatur")]
    pub ground_temperature: String,
}

impl Calculation for HeatGenRequest {
    const ROUTE: Route = Route::HeatGen;
    type Response = HeatGenResponse;
}

/// `/calculate_cop_yearly`: hourly COP over a year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopYearlyRequest {
    #[serde(rename = "Heiztemperatur")]
    pub flow_temperature: String,
    #[serde(rename = "wärmequelle")]
    pub heat_source: String,
    #[serde(rename = "ErdreichTemperatur")]
    pub ground_temperature: String,
}

impl Calculation for CopYearlyRequest {
    const ROUTE: Route = Route::CopYearly;
    type Response = CopYearlyResponse;
}

/// `/calculate_strombedarf`: hourly electricity demand of the heat pump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrombedarfRequest {
    #[serde(rename = "JEB_Wärme_ges_kWh")]
    pub annual_heat_kwh: String,
    #[serde(rename = "buildingType")]
    pub building_type: String,
    #[serde(rename = "Heiztemperatur")]
    pub flow_temperature: String,
    #[serde(rename = "wärmequelle")]
    pub heat_source: String,
    #[serde(rename = "ErdreichTemperatur")]
    pub ground_temperature: String,
}

impl Calculation for StrombedarfRequest {
    const ROUTE: Route = Route::Strombedarf;
    type Response = StrombedarfResponse;
}
