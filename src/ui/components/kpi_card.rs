use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    #[props(default)] highlight: bool,
) -> Element {
    let container = if highlight {
        "rounded-xl border border-indigo-500 bg-indigo-600 p-4 text-white shadow-lg"
    } else {
        "rounded-xl border border-slate-200 bg-white p-4 shadow-sm"
    };
    let value_class = if highlight {
        "mt-2 text-3xl font-black tracking-tight"
    } else {
        "mt-2 text-2xl font-semibold text-slate-900"
    };
    rsx! {
        div {
            class: "{container}",
            h3 { class: "{theme::label_class()}", "{title}" }
            p { class: "{value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs opacity-80", "{desc}" }
            }
        }
    }
}
