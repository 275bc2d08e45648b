use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Failures stay up longer so the message can be read.
    pub fn lifetime(self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(5),
            ToastKind::Warning | ToastKind::Error => Duration::from_secs(9),
        }
    }

    fn classes(self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-300 bg-sky-50 text-sky-900",
            ToastKind::Success => "border-emerald-300 bg-emerald-50 text-emerald-900",
            ToastKind::Warning => "border-amber-300 bg-amber-50 text-amber-900",
            ToastKind::Error => "border-rose-300 bg-rose-50 text-rose-900",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
    /// Secondary line, e.g. the path an export was written to.
    pub detail: Option<String>,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Appends a toast, dropping the oldest once the stack is full.
pub fn enqueue_toast(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_VISIBLE_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, message: ToastMessage) {
    match message.kind {
        ToastKind::Error => tracing::warn!(text = %message.text, "error toast"),
        _ => tracing::debug!(text = %message.text, "toast"),
    }
    toasts.with_mut(|entries| enqueue_toast(entries, message));
}

fn dismiss_toast(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|entries| entries.retain(|toast| toast.id != id));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();
    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for message in messages {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_id = message.id.clone();
    let lifetime = message.kind.lifetime();
    use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(lifetime).await;
            dismiss_toast(toasts, &id);
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg {}",
        message.kind.classes()
    );
    let icon = message.kind.icon();
    let button_id = message.id.clone();
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{icon}" }
            div {
                p { class: "text-sm font-medium", "{message.text}" }
                if let Some(detail) = message.detail {
                    p { class: "mt-0.5 break-all text-xs opacity-70", "{detail}" }
                }
            }
            button {
                class: "ml-3 text-xs uppercase tracking-wide opacity-70 hover:opacity-100",
                onclick: move |_| dismiss_toast(toasts, &button_id),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut entries = Vec::new();
        for idx in 0..=MAX_VISIBLE_TOASTS {
            enqueue_toast(&mut entries, ToastMessage::new(ToastKind::Info, format!("t{idx}")));
        }
        assert_eq!(entries.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(entries[0].text, "t1");
        assert_eq!(entries.last().map(|t| t.text.as_str()), Some("t4"));
    }

    #[test]
    fn detail_is_optional() {
        let plain = ToastMessage::new(ToastKind::Success, "Saved");
        assert!(plain.detail.is_none());
        let detailed = plain.with_detail("/tmp/report.xlsx");
        assert_eq!(detailed.detail.as_deref(), Some("/tmp/report.xlsx"));
    }

    #[test]
    fn errors_linger_longer_than_successes() {
        assert!(ToastKind::Error.lifetime() > ToastKind::Success.lifetime());
    }
}
