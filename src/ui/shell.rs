use dioxus::prelude::*;

use crate::app::{export_snapshot, ExportFormat, Route};
use crate::domain::AppState;
use crate::ui::{components::ToastMessage, theme};
use crate::util::version::{version_label, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-50 text-slate-900 font-sans",
            header {
                class: "sticky top-0 z-10 border-b border-slate-200 bg-white/90 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-7xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "rounded-lg bg-indigo-600 px-2 py-1 text-lg font-black text-white", "₹" }
                        div {
                            h1 { class: "text-lg font-black leading-none tracking-tighter", "{APP_NAME}" }
                            p { class: "text-[10px] font-bold uppercase tracking-widest text-indigo-600", "{APP_TAGLINE}" }
                        }
                    }

                    nav { class: "flex gap-2",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Calculator",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "Settings",
                        }
                    }

                    div { class: "flex gap-2",
                        button {
                            class: "{theme::btn_secondary()}",
                            onclick: move |_| export_snapshot(state, toasts, ExportFormat::Spreadsheet),
                            "EXCEL"
                        }
                        button {
                            class: "{theme::btn_primary()}",
                            onclick: move |_| export_snapshot(state, toasts, ExportFormat::Document),
                            "PDF"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-7xl px-6 py-8",
                {children}
            }
            footer { class: "border-t border-slate-200 py-6 text-center",
                p { class: "text-[10px] font-bold uppercase tracking-widest text-slate-400", "{version}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
