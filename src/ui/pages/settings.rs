use dioxus::prelude::*;

use crate::{
    domain::{report::results_snapshot, AppState},
    infra::export_dir::{default_export_dir, resolve_export_dir, EXPORT_DIR_ENV},
    ui::{
        components::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{BuildInfo, APP_NAME, APP_TAGLINE},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial_dir = state.with(|st| {
        st.export_dir_override
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default()
    });
    let mut export_dir_input = use_signal(|| initial_dir);

    let effective_dir = state.with(|st| {
        resolve_export_dir(st.export_dir_override.as_deref())
            .display()
            .to_string()
    });
    let fallback_dir = default_export_dir().display().to_string();
    let snapshot = state.with(|st| {
        results_snapshot(&st.results()).unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to serialise results snapshot");
            format!("unavailable: {err}")
        })
    });
    let build = BuildInfo::current();

    let on_apply = {
        let mut state = state;
        move |_| {
            let raw = export_dir_input();
            state.with_mut(|st| st.set_export_dir(&raw));
            let message = match state.with(|st| st.export_dir_override.clone()) {
                Some(dir) => ToastMessage::new(ToastKind::Success, "Export directory updated.")
                    .with_detail(dir.display().to_string()),
                None => ToastMessage::new(ToastKind::Info, "Using the default export directory."),
            };
            push_toast(toasts, message);
        }
    };

    let on_clear = {
        let mut state = state;
        move |_| {
            export_dir_input.set(String::new());
            state.with_mut(|st| st.set_export_dir(""));
            push_toast(
                toasts,
                ToastMessage::new(ToastKind::Info, "Using the default export directory."),
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "{theme::panel()}",
                h2 { class: "{theme::panel_title()}", "Export Directory" }
                p { class: "mt-2 text-sm {theme::text_muted()}",
                    "Spreadsheets and PDF summaries are written here. Leave blank to use "
                    code { class: "text-xs", "{EXPORT_DIR_ENV}" }
                    " or your downloads folder."
                }
                div { class: "mt-4",
                    label { class: "{theme::label_class()}", "Directory for this session" }
                    input {
                        class: "{theme::input_class()}",
                        placeholder: "{fallback_dir}",
                        value: export_dir_input(),
                        oninput: move |evt| export_dir_input.set(evt.value()),
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary()}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary()}", onclick: on_clear, "Use Default" }
                }
                p { class: "mt-4 break-all text-xs {theme::text_muted()}",
                    "Exports currently go to: "
                    span { class: "font-semibold text-slate-800", "{effective_dir}" }
                }
            }

            section { class: "{theme::panel()}",
                h2 { class: "{theme::panel_title()}", "Results Snapshot" }
                p { class: "mt-2 text-sm {theme::text_muted()}",
                    "The figures the exports are built from, as computed for the current inputs."
                }
                pre {
                    class: "mt-3 max-h-80 overflow-auto rounded-lg bg-slate-900 p-4 text-xs text-slate-100",
                    "{snapshot}"
                }
            }

            section {
                class: "flex flex-col items-center gap-2 {theme::panel()} text-center",
                h2 { class: "{theme::panel_title()}", "About" }
                p { class: "text-lg font-black text-slate-900", "{APP_NAME}" }
                p { class: "text-sm {theme::text_muted()}", "{APP_TAGLINE}" }
                p { class: "text-xs {theme::text_muted()}", "{build}" }
            }
        }
    }
}
