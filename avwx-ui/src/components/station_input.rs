//! Station code text input with optional quick-pick buttons.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StationInputProps {
    pub label: String,
    pub value: String,
    #[props(default = String::new())]
    pub placeholder: String,
    pub max_length: usize,
    /// Codes offered as buttons under the input.
    #[props(default = &[])]
    pub examples: &'static [&'static str],
    /// Raw input value on every keystroke. A quick-pick click sends its code
    /// through the same handler.
    pub on_input: EventHandler<String>,
}

#[component]
pub fn StationInput(props: StationInputProps) -> Element {
    let on_input = props.on_input;
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            label {
                style: "display: flex; flex-direction: column; gap: 4px; font-weight: bold;",
                "{props.label}"
                input {
                    r#type: "text",
                    value: "{props.value}",
                    placeholder: "{props.placeholder}",
                    maxlength: "{props.max_length}",
                    style: "padding: 6px 8px; font-family: monospace; text-transform: uppercase;",
                    oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
                }
            }
            if !props.examples.is_empty() {
                div {
                    class: "station-examples",
                    style: "display: flex; flex-wrap: wrap; gap: 6px; font-size: 12px;",
                    for code in props.examples.iter().copied() {
                        button {
                            key: "{code}",
                            r#type: "button",
                            class: "station-example",
                            style: "padding: 2px 8px; border: 1px solid #90A4AE; border-radius: 12px; background: #fff; font-family: monospace; cursor: pointer;",
                            onclick: move |_| on_input.call(code.to_string()),
                            "{code}"
                        }
                    }
                }
            }
        }
    }
}
