//! Trigger button and read-only output area of one flow.

use crate::state::AppState;
use dioxus::prelude::*;
use hpc_core::flow::Flow;

#[derive(Props, Clone, PartialEq)]
pub struct CalculateButtonProps {
    pub flow: Flow,
    pub onclick: EventHandler<MouseEvent>,
}

/// The single control bound to a flow.
#[component]
pub fn CalculateButton(props: CalculateButtonProps) -> Element {
    let id = format!("btn{}", props.flow.route().path().replace('/', "-"));
    let label = props.flow.button_label();

    rsx! {
        button {
            id: "{id}",
            style: "margin: 8px 0; padding: 6px 14px; background: lightblue; border: 1px solid #90A4AE; border-radius: 4px; cursor: pointer;",
            onclick: move |evt| props.onclick.call(evt),
            "{label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ResultFieldProps {
    pub flow: Flow,
    #[props(default = String::new())]
    pub label: String,
}

/// Shows the flow's latest output text, or nothing before the first reply.
#[component]
pub fn ResultField(props: ResultFieldProps) -> Element {
    let state = use_context::<AppState>();
    let text = state.output(props.flow);
    let pending = state.is_pending(props.flow);

    rsx! {
        div {
            style: "margin: 4px 0; font-size: 14px;",
            if !props.label.is_empty() {
                span { style: "margin-right: 8px;", "{props.label}" }
            }
            if let Some(text) = text {
                span {
                    style: "font-weight: bold; color: green;",
                    "{text}"
                }
            } else if pending {
                span { style: "color: #888;", "Anfrage gesendet..." }
            }
        }
    }
}
