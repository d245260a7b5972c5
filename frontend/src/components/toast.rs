use crate::state::flash::FlashSlot;
use leptos::*;
use uuid::Uuid;

pub const TOAST_DURATION_MS: u32 = 4_000;
pub const MAX_VISIBLE_TOASTS: usize = 5;
pub const WELCOME_MESSAGE: &str = "Login successful! Welcome back.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    fn classes(self) -> &'static str {
        match self {
            Severity::Info => "bg-blue-50 border-blue-300 text-blue-800",
            Severity::Success => "bg-green-50 border-green-300 text-green-800",
            Severity::Error => "bg-red-50 border-red-300 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

/// Handle to the toast stack. Copy it freely; all copies share one stack.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    /// Stacks the message and schedules its removal. When the stack is full
    /// the oldest toast is dropped.
    pub fn notify(&self, severity: Severity, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
        };
        let id = toast.id;
        self.items.update(|items| {
            items.push(toast);
            if items.len() > MAX_VISIBLE_TOASTS {
                let overflow = items.len() - MAX_VISIBLE_TOASTS;
                items.drain(..overflow);
            }
        });
        schedule_dismiss(*self, id);
        id
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.notify(Severity::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.notify(Severity::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.notify(Severity::Error, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        // The stack may already be gone if the app unmounted meanwhile.
        let _ = self
            .items
            .try_update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.items.get_untracked()
    }

    /// Shows an error handed over through navigation state, then clears it.
    pub fn relay_flash_error(&self, flash: FlashSlot) -> bool {
        match flash.take_error() {
            Some(message) => {
                self.error(message);
                true
            }
            None => false,
        }
    }

    /// Greets a freshly logged-in user once.
    pub fn relay_welcome(&self, flash: FlashSlot) -> bool {
        let welcomed = flash.take_welcome();
        if welcomed {
            self.success(WELCOME_MESSAGE);
        }
        welcomed
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toasts: Toasts, id: Uuid) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: Toasts, _id: Uuid) {}

pub fn use_toasts() -> Toasts {
    match use_context::<Toasts>() {
        Some(toasts) => toasts,
        None => {
            let toasts = Toasts::new();
            provide_context(toasts);
            toasts
        }
    }
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(Toasts::new());
    view! {
        <>
            {children()}
            <ToastViewport/>
        </>
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed top-20 right-4 z-50 space-y-2 w-80" role="status" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("flex items-start justify-between gap-3 border rounded-lg shadow px-4 py-3 {}", toast.severity.classes())>
                            <span class="text-sm">{toast.message}</span>
                            <button
                                type="button"
                                class="text-sm opacity-60 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
