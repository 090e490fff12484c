//! Fire-and-forget execution of one flow.
//!
//! The request is sent on the Dioxus runtime; when it completes, the flow's
//! outcome is written into `AppState` and its chart (if any) is redrawn.
//! Nothing is returned to the caller and nothing here panics.

use crate::fetch::FetchTransport;
use crate::state::AppState;
use dioxus::prelude::*;
use hpc_core::flow::{Flow, FlowOutcome};
use hpc_core::registry::Ticket;
use hpc_core::request::Calculation;
use hpc_core::{invoke, InvokeError};
use log::{debug, info};

/// Send `request` for `flow` and present the reply with `present`.
pub fn run_flow<C, P>(mut state: AppState, flow: Flow, request: C, present: P)
where
    C: Calculation + 'static,
    P: FnOnce(Result<C::Response, InvokeError>) -> FlowOutcome + 'static,
{
    let ticket = flow
        .canvas_id()
        .map(|canvas_id| state.charts.write().issue_ticket(canvas_id));
    state.pending.write().start(flow);
    info!("{:?}: request sent to {}", flow, flow.route());

    spawn(async move {
        let transport = FetchTransport::same_origin();
        let outcome = present(invoke(&transport, &request).await);
        state.pending.write().finish(flow);
        apply_outcome(state, flow, ticket.as_ref(), outcome);
    });
}

/// Write a flow's outcome into the page.
///
/// A result for a canvas that has since been re-requested is discarded
/// whole, text included.
pub fn apply_outcome(
    mut state: AppState,
    flow: Flow,
    ticket: Option<&Ticket>,
    outcome: FlowOutcome,
) {
    if let Some(ticket) = ticket {
        let settled = state.charts.write().settle(ticket, outcome.chart_update());
        if !settled.applies() {
            debug!("{:?}: newer request pending, dropping this result", flow);
            return;
        }
    }

    match outcome.message {
        Some(message) => {
            state.outputs.write().insert(flow, message);
        }
        None => {
            state.outputs.write().remove(&flow);
        }
    }
}
