use std::path::PathBuf;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, DegenerateInput},
    infra::{
        document::export_document, export_dir::resolve_export_dir,
        spreadsheet::export_spreadsheet, ExportError,
    },
    ui::{
        components::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, SettingsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/settings")]
    Settings {},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Spreadsheet,
    Document,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "Spreadsheet",
            ExportFormat::Document => "PDF summary",
        }
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current inputs and results in `format`, reporting the outcome
/// as a toast. The calculator state is only read.
pub fn export_snapshot(
    state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    format: ExportFormat,
) {
    let (inputs, results, dir) = state.with(|st| {
        (
            st.inputs.clone(),
            st.results(),
            resolve_export_dir(st.export_dir_override.as_deref()),
        )
    });

    let outcome = match format {
        ExportFormat::Spreadsheet => export_spreadsheet(&dir, &inputs, &results),
        ExportFormat::Document => export_document(&dir, &inputs, &results),
    };

    if let Err(err) = &outcome {
        tracing::error!(?format, %err, dir = %dir.display(), "export failed");
    }
    let message = export_toast(format, outcome, results.checked().err());
    push_toast(toasts, message);
}

/// Successful exports of degenerate figures are reported as warnings.
fn export_toast(
    format: ExportFormat,
    outcome: Result<PathBuf, ExportError>,
    degenerate: Option<DegenerateInput>,
) -> ToastMessage {
    match (outcome, degenerate) {
        (Ok(path), None) => {
            ToastMessage::new(ToastKind::Success, format!("{} exported.", format.label()))
                .with_detail(path.display().to_string())
        }
        (Ok(path), Some(reason)) => ToastMessage::new(
            ToastKind::Warning,
            format!("{} exported, but {reason}.", format.label()),
        )
        .with_detail(path.display().to_string()),
        (Err(err), _) => ToastMessage::new(
            ToastKind::Error,
            format!("{} export failed: {err}", format.label()),
        ),
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
