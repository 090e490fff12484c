//! Labeled numeric input bound to a text signal.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NumberFieldProps {
    pub id: String,
    pub label: String,
    /// Raw input text; sent to the backend unparsed
    pub value: Signal<String>,
    #[props(default = String::new())]
    pub tooltip: String,
}

#[component]
pub fn NumberField(props: NumberFieldProps) -> Element {
    let mut value = props.value;
    let current = value();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold;",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                r#type: "number",
                title: "{props.tooltip}",
                value: "{current}",
                style: "width: 100px;",
                oninput: move |evt: Event<FormData>| value.set(evt.value()),
            }
        }
    }
}
