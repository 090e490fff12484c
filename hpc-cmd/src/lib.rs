//! Command implementations for the heat-pump calculator CLI.
//!
//! Each subcommand runs one backend calculation with the same request
//! fields the web page sends, then prints the flow's output text and a
//! summary of the series it would chart.

use clap::Subcommand;
use hpc_core::request::{
    AnnualLoadRequest, CopRequest, CopYearlyRequest, HeatGenRequest, StrombedarfRequest,
};
use hpc_core::Transport;
use std::path::PathBuf;

pub mod calc;
pub mod report;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annual heat load profile of a building (/calculate)
    Load {
        /// Annual heat demand in kWh
        #[arg(long, default_value = "15000")]
        annual_heat_kwh: String,

        /// Building type code: HEF, HMF or GHD
        #[arg(long, default_value = "HEF")]
        building_type: String,

        /// Write the Chart.js configuration to this file
        #[arg(long)]
        chart_out: Option<PathBuf>,
    },

    /// COP for one source/flow temperature pair (/calculate_cop)
    Cop {
        /// Heat source temperature in °C
        #[arg(long, default_value = "5")]
        source_temperature: String,

        /// Heating flow temperature in °C
        #[arg(long, default_value = "65")]
        flow_temperature: String,
    },

    /// Heat generator sizing (/calculate_heatgen)
    HeatGen {
        #[arg(long, default_value = "65")]
        flow_temperature: String,

        /// Heat source: Luft or Erdreich
        #[arg(long, default_value = "Luft")]
        heat_source: String,

        /// Ground temperature in °C (used for Erdreich)
        #[arg(long, default_value = "10")]
        ground_temperature: String,

        #[arg(long)]
        chart_out: Option<PathBuf>,
    },

    /// Hourly COP over a year (/calculate_cop_yearly)
    CopYearly {
        #[arg(long, default_value = "65")]
        flow_temperature: String,

        #[arg(long, default_value = "Luft")]
        heat_source: String,

        #[arg(long, default_value = "10")]
        ground_temperature: String,

        #[arg(long)]
        chart_out: Option<PathBuf>,
    },

    /// Hourly electricity demand of the heat pump (/calculate_strombedarf)
    Strombedarf {
        #[arg(long, default_value = "15000")]
        annual_heat_kwh: String,

        #[arg(long, default_value = "HEF")]
        building_type: String,

        #[arg(long, default_value = "65")]
        flow_temperature: String,

        #[arg(long, default_value = "Luft")]
        heat_source: String,

        #[arg(long, default_value = "10")]
        ground_temperature: String,

        #[arg(long)]
        chart_out: Option<PathBuf>,
    },
}

/// Run one command and return the report to print.
pub async fn run<T: Transport + ?Sized>(command: Command, transport: &T) -> anyhow::Result<String> {
    match command {
        Command::Load {
            annual_heat_kwh,
            building_type,
            chart_out,
        } => {
            let request = AnnualLoadRequest {
                annual_heat_kwh,
                building_type,
            };
            calc::run_load(transport, &request, chart_out.as_deref()).await
        }
        Command::Cop {
            source_temperature,
            flow_temperature,
        } => {
            let request = CopRequest {
                source_temperature,
                flow_temperature,
            };
            calc::run_cop(transport, &request).await
        }
        Command::HeatGen {
            flow_temperature,
            heat_source,
            ground_temperature,
            chart_out,
        } => {
            let request = HeatGenRequest {
                flow_temperature,
                heat_source,
                ground_temperature,
            };
            calc::run_heat_gen(transport, &request, chart_out.as_deref()).await
        }
        Command::CopYearly {
            flow_temperature,
            heat_source,
            ground_temperature,
            chart_out,
        } => {
            let request = CopYearlyRequest {
                flow_temperature,
                heat_source,
                ground_temperature,
            };
            calc::run_cop_yearly(transport, &request, chart_out.as_deref()).await
        }
        Command::Strombedarf {
            annual_heat_kwh,
            building_type,
            flow_temperature,
            heat_source,
            ground_temperature,
            chart_out,
        } => {
            let request = StrombedarfRequest {
                annual_heat_kwh,
                building_type,
                flow_temperature,
                heat_source,
                ground_temperature,
            };
            calc::run_strombedarf(transport, &request, chart_out.as_deref()).await
        }
    }
}
