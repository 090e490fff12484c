//! Canvas container for one flow's chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the canvas (Chart.js binds to this)
    pub id: String,
    /// Whether a request for this chart is in flight
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A `<canvas>` for Chart.js with a loading overlay.
///
/// The canvas stays mounted across re-renders so the chart registry's
/// handle remains bound to the same element.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Berechnung läuft..."
                }
            }
            canvas {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
