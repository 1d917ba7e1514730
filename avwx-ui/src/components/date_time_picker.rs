//! Date input with hour and (optionally) minute selects.

use avwx_core::datetime::{hour_options, minute_options, DateTimeFields};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateTimePickerProps {
    pub label: String,
    pub fields: DateTimeFields,
    #[props(default = true)]
    pub show_minute: bool,
    pub on_change: EventHandler<DateTimeFields>,
}

#[component]
pub fn DateTimePicker(props: DateTimePickerProps) -> Element {
    let on_change = props.on_change;
    let fields = props.fields.clone();

    let on_date = {
        let fields = fields.clone();
        move |evt: Event<FormData>| {
            on_change.call(DateTimeFields {
                date: evt.value(),
                ..fields.clone()
            })
        }
    };
    let on_hour = {
        let fields = fields.clone();
        move |evt: Event<FormData>| {
            on_change.call(DateTimeFields {
                hour: evt.value(),
                ..fields.clone()
            })
        }
    };
    let on_minute = {
        let fields = fields.clone();
        move |evt: Event<FormData>| {
            on_change.call(DateTimeFields {
                minute: evt.value(),
                ..fields.clone()
            })
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold; min-width: 60px;", "{props.label}" }
            input {
                r#type: "date",
                value: "{fields.date}",
                onchange: on_date,
            }
            select {
                value: "{fields.hour}",
                onchange: on_hour,
                option { value: "", selected: fields.hour.is_empty(), "HH" }
                for hour in hour_options() {
                    option {
                        key: "{hour}",
                        value: "{hour}",
                        selected: hour == fields.hour,
                        "{hour}"
                    }
                }
            }
            if props.show_minute {
                select {
                    value: "{fields.minute}",
                    onchange: on_minute,
                    option { value: "", selected: fields.minute.is_empty(), "MM" }
                    for minute in minute_options() {
                        option {
                            key: "{minute}",
                            value: "{minute}",
                            selected: minute == fields.minute,
                            "{minute}"
                        }
                    }
                }
            }
        }
    }
}
