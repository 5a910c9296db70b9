use leptos::prelude::*;

use crate::{
    contact::Notifier,
    toast::{Toast, ToastKind, ToastQueue, TOAST_DURATION},
};

/// Handle to the on-screen toast queue, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastQueue::default()))
    }

    pub fn show(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.0.update(|q| id = q.push(kind, message));
        let queue = self.0;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            TOAST_DURATION,
        );
    }

    fn snapshot(&self) -> Vec<Toast> {
        self.0.with(|q| q.iter().cloned().collect())
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn failure(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            <For
                each=move || toasts.snapshot()
                key=|toast| toast.id
                children=move |toast| {
                    let (icon, border) = match toast.kind {
                        ToastKind::Success => ("✓", "border-green-500/60"),
                        ToastKind::Error => ("✗", "border-red-500/60"),
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "toast flex items-center gap-3 px-4 py-3 rounded-lg bg-black/90 text-white border shadow-lg {border}",
                            )
                        >
                            <span>{icon}</span>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
