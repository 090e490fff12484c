//! Dropdown selectors for building type and heat source.

use crate::state::AppState;
use dioxus::prelude::*;
use hpc_core::building::{BuildingType, HeatSource};

/// Building type dropdown. Option values are the backend codes.
#[component]
pub fn BuildingTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.building_type)();

    let on_change = move |evt: Event<FormData>| {
        state.building_type.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "building-type-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Gebäudetyp: "
            }
            select {
                id: "building-type-select",
                onchange: on_change,
                for (code, name) in BuildingType::ALL.iter().map(|b| (b.code(), b.label())) {
                    option {
                        value: "{code}",
                        selected: code == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}

/// Heat source dropdown.
#[component]
pub fn HeatSourceSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.heat_source)();

    let on_change = move |evt: Event<FormData>| {
        state.heat_source.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "heat-source-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Wärmequelle: "
            }
            select {
                id: "heat-source-select",
                onchange: on_change,
                for code in HeatSource::ALL.iter().map(|h| h.code()) {
                    option {
                        value: "{code}",
                        selected: code == selected,
                        "{code}"
                    }
                }
            }
        }
    }
}
