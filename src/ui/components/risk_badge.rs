use dioxus::prelude::*;

use crate::{domain::RiskLevel, ui::theme};

#[component]
pub fn RiskBadge(level: RiskLevel) -> Element {
    let color = theme::risk_badge(level);
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-bold {color}",
            "{level.label()} RISK"
        }
    }
}
