//! One function per backend calculation.
//!
//! A backend-reported error becomes the command's error with the backend's
//! text unchanged; everything else is wrapped with the failing route.

use crate::report;
use anyhow::{bail, Context};
use hpc_core::flow::{self, FlowOutcome};
use hpc_core::request::{
    AnnualLoadRequest, Calculation, CopRequest, CopYearlyRequest, HeatGenRequest,
    StrombedarfRequest,
};
use hpc_core::{invoke, InvokeError, Transport};
use log::{info, warn};
use std::path::Path;

async fn calculate<C, T>(transport: &T, request: &C) -> anyhow::Result<C::Response>
where
    C: Calculation,
    T: Transport + ?Sized,
{
    match invoke(transport, request).await {
        Ok(response) => Ok(response),
        Err(InvokeError::Backend(message)) => bail!("{message}"),
        Err(err) => Err(err).with_context(|| format!("{} failed", C::ROUTE)),
    }
}

fn finish(outcome: &FlowOutcome, chart_out: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = chart_out {
        match &outcome.chart {
            Some(spec) => {
                let config = serde_json::to_string_pretty(&spec.to_chartjs_config())?;
                std::fs::write(path, config)
                    .with_context(|| format!("writing chart config to {}", path.display()))?;
                info!("Chart.js config written to {}", path.display());
            }
            None => warn!("no chart to write for this result"),
        }
    }
    Ok(report::render(outcome))
}

pub async fn run_load<T: Transport + ?Sized>(
    transport: &T,
    request: &AnnualLoadRequest,
    chart_out: Option<&Path>,
) -> anyhow::Result<String> {
    let response = calculate(transport, request).await?;
    finish(&flow::present_annual_load(Ok(response)), chart_out)
}

pub async fn run_cop<T: Transport + ?Sized>(
    transport: &T,
    request: &CopRequest,
) -> anyhow::Result<String> {
    let response = calculate(transport, request).await?;
    finish(&flow::present_cop(Ok(response)), None)
}

pub async fn run_heat_gen<T: Transport + ?Sized>(
    transport: &T,
    request: &HeatGenRequest,
    chart_out: Option<&Path>,
) -> anyhow::Result<String> {
    let response = calculate(transport, request).await?;
    finish(&flow::present_heat_gen(Ok(response)), chart_out)
}

pub async fn run_cop_yearly<T: Transport + ?Sized>(
    transport: &T,
    request: &CopYearlyRequest,
    chart_out: Option<&Path>,
) -> anyhow::Result<String> {
    let response = calculate(transport, request).await?;
    finish(&flow::present_cop_yearly(Ok(response)), chart_out)
}

pub async fn run_strombedarf<T: Transport + ?Sized>(
    transport: &T,
    request: &StrombedarfRequest,
    chart_out: Option<&Path>,
) -> anyhow::Result<String> {
    let response = calculate(transport, request).await?;
    finish(&flow::present_strombedarf(Ok(response)), chart_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hpc_core::route::Route;
    use hpc_core::RawReply;

    struct Canned(u16, &'static str);

    #[async_trait(?Send)]
    impl Transport for Canned {
        async fn post_json(&self, _route: Route, _body: String) -> Result<RawReply, InvokeError> {
            Ok(RawReply {
                status: self.0,
                body: self.1.to_string(),
            })
        }
    }

    struct Unreachable;

    #[async_trait(?Send)]
    impl Transport for Unreachable {
        async fn post_json(&self, _route: Route, _body: String) -> Result<RawReply, InvokeError> {
            Err(InvokeError::Transport("connection refused".into()))
        }
    }

    fn cop_request() -> CopRequest {
        CopRequest {
            source_temperature: "10".into(),
            flow_temperature: "35".into(),
        }
    }

    #[tokio::test]
    async fn cop_prints_two_decimals() {
        let report = run_cop(&Canned(200, r#"{"cop": 3.456}"#), &cop_request())
            .await
            .unwrap();
        assert_eq!(report.trim(), "3.46");
    }

    #[tokio::test]
    async fn backend_error_text_is_the_error() {
        let err = run_cop(
            &Canned(400, r#"{"error": "Ungültige Temperatur"}"#),
            &cop_request(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Ungültige Temperatur");
    }

    #[tokio::test]
    async fn transport_error_names_the_route() {
        let err = run_cop(&Unreachable, &cop_request()).await.unwrap_err();
        assert_eq!(err.to_string(), "/calculate_cop failed");
        assert!(format!("{err:#}").contains("connection refused"));
    }

    #[tokio::test]
    async fn chart_config_is_written() {
        let path = std::env::temp_dir().join(format!("hpc-cmd-test-{}.json", std::process::id()));
        let body = r#"{"time_steps": ["a", "b"], "COP": [2.5, 3.5], "hourly_temperatures": [0.0, 5.0]}"#;
        let request = CopYearlyRequest {
            flow_temperature: "65".into(),
            heat_source: "Luft".into(),
            ground_temperature: "10".into(),
        };
        let report = run_cop_yearly(&Canned(200, body), &request, Some(&path))
            .await
            .unwrap();
        assert!(report.contains("COP: 2 Werte"));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["options"]["scales"]["y1"]["position"], "right");
        let _ = std::fs::remove_file(&path);
    }
}
