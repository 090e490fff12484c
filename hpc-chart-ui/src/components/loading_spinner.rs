//! Shown while Chart.js is still loading.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Diagrammbibliothek wird geladen..."
        }
    }
}
