use super::NotificationCenter;
use contracts::shared::notification::Notification;
use leptos::prelude::*;

/// Renders the live toasts of a `NotificationCenter`.
///
/// Mounted once next to the viewer. Clicking a toast dismisses it.
#[component]
#[allow(non_snake_case)]
pub fn NotificationHost(center: NotificationCenter) -> impl IntoView {
    let toasts = center.toasts();
    let center = StoredValue::new_local(center);

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Notification| {
                    let id = toast.id;
                    let class = move || {
                        toasts.with(|list| {
                            list.iter()
                                .find(|t| t.id == id)
                                .map(|t| t.css_class())
                                .unwrap_or_default()
                        })
                    };
                    view! {
                        <div
                            class=class
                            role="status"
                            on:click=move |_| center.with_value(|c| c.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
