//! Ephemeral toast notifications.
//!
//! Stages never toast directly; they return
//! [`Notification`]s, and the application shell pushes those into a
//! [`Toasts`] controller created with [`use_toasts`]. Each toast
//! auto-expires after [`TOAST_LIFETIME_MS`] or on manual dismissal.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdTriangleAlert, LdX};
use gloo_timers::future::TimeoutFuture;
use karyo_analysis::{Notification, Severity};

/// How long a toast stays visible, in milliseconds.
pub const TOAST_LIFETIME_MS: u32 = 5000;

/// One rendered toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier, used for dismissal.
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

/// Handle to the shell-owned toast state.
///
/// `Copy` so event handlers can capture it freely (it wraps Dioxus
/// signals, which are themselves copyable handles).
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    /// Currently visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }

    /// Show a notification as a toast and schedule its expiry.
    pub fn push(mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id += 1;

        self.items.write().push(Toast {
            id,
            severity: notification.severity,
            title: notification.title,
            body: notification.body,
        });

        spawn(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            self.dismiss(id);
        });
    }

    /// Remove a toast by id. Idempotent.
    pub fn dismiss(mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }
}

/// Create the toast controller. Call once, from the shell component.
#[must_use]
pub fn use_toasts() -> Toasts {
    Toasts {
        items: use_signal(Vec::new),
        next_id: use_signal(|| 0),
    }
}

/// Props for the [`ToastHost`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToastHostProps {
    /// Toasts to render, oldest first.
    toasts: Vec<Toast>,
    /// Fired with the toast id when its dismiss button is clicked.
    on_dismiss: EventHandler<u64>,
}

/// Fixed-position stack of dismissible toasts.
#[component]
pub fn ToastHost(props: ToastHostProps) -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in props.toasts.iter() {
                {render_toast(toast, &props.on_dismiss)}
            }
        }
    }
}

/// Render a single toast card.
fn render_toast(toast: &Toast, on_dismiss: &EventHandler<u64>) -> Element {
    let id = toast.id;
    let severity_class = match toast.severity {
        Severity::Info => "toast toast-info",
        Severity::Warning => "toast toast-warning",
    };
    let onclick = {
        let on_dismiss = *on_dismiss;
        move |_| on_dismiss.call(id)
    };
    let icon = match toast.severity {
        Severity::Info => rsx! {
            Icon { icon: LdCircleCheck, width: 18, height: 18 }
        },
        Severity::Warning => rsx! {
            Icon { icon: LdTriangleAlert, width: 18, height: 18 }
        },
    };

    rsx! {
        div { class: "{severity_class}", role: "status",
            span { class: "toast-icon", {icon} }
            div { class: "toast-text",
                p { class: "toast-title", "{toast.title}" }
                p { class: "toast-body", "{toast.body}" }
            }
            button {
                class: "toast-dismiss",
                aria_label: "Dismiss notification",
                onclick: onclick,
                Icon { icon: LdX, width: 14, height: 14 }
            }
        }
    }
}
