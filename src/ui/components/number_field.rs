use dioxus::prelude::*;

use crate::{
    domain::{AppState, GstRate, InputField},
    ui::theme,
};

/// Labelled form input bound to one calculator field.
#[component]
pub fn NumberField(
    label: &'static str,
    field: InputField,
    hint: &'static str,
    prefix: Option<&'static str>,
) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let value = state.with(|st| st.inputs.field_text(field));
    let input_type = if field == InputField::ProductName {
        "text"
    } else {
        "number"
    };
    let input_class = match prefix {
        Some(_) => format!("{} pl-7", theme::input_class()),
        None => theme::input_class().to_string(),
    };

    rsx! {
        div {
            label {
                class: "{theme::label_class()}",
                "{label}"
                span { class: "ml-1 cursor-help text-slate-400", title: "{hint}", "ⓘ" }
            }
            div {
                class: "relative",
                if let Some(prefix) = prefix {
                    span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-sm text-slate-400", "{prefix}" }
                }
                input {
                    class: "{input_class}",
                    r#type: input_type,
                    value: "{value}",
                    oninput: move |evt| state.with_mut(|st| st.update_field(field, &evt.value())),
                }
            }
        }
    }
}

#[component]
pub fn GstSelect() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let current = state.with(|st| st.inputs.field_text(InputField::Gst));
    let options = GstRate::ALL
        .iter()
        .map(|&rate| (u8::from(rate).to_string(), rate.label()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            label {
                class: "{theme::label_class()}",
                "Product GST"
                span {
                    class: "ml-1 cursor-help text-slate-400",
                    title: "GST rate applicable to your clothing product (usually 5% or 12%).",
                    "ⓘ"
                }
            }
            select {
                class: "{theme::input_class()}",
                value: "{current}",
                onchange: move |evt| state.with_mut(|st| st.update_field(InputField::Gst, &evt.value())),
                for (percent, label) in options {
                    option {
                        key: "{percent}",
                        value: "{percent}",
                        selected: current == percent,
                        "{label}"
                    }
                }
            }
        }
    }
}
