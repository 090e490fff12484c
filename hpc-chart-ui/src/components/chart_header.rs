//! Section header with title and a short description of what is plotted.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
    /// Axis explanation (e.g., "links kW, rechts °C")
    #[props(default = String::new())]
    pub unit_description: String,
}

/// Header for a flow section showing title and optional axis description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Achsen: {props.unit_description}"
                }
            }
        }
    }
}
