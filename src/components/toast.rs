use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const TOAST_MS: u32 = 4000;

static TOAST_SEQ: AtomicU64 = AtomicU64::new(0);

pub static TOAST: GlobalSignal<Option<(u64, String)>> = Signal::global(|| None);

/// Shows `message` until it expires or a newer toast replaces it. Expiry is
/// driven by the `Toast` host, so the caller's scope may go away meanwhile.
pub fn show_toast(message: impl Into<String>) {
    let id = TOAST_SEQ.fetch_add(1, Ordering::Relaxed);
    *TOAST.write() = Some((id, message.into()));
}

/// Clears the toast only if it is still the one `id` refers to.
fn expire(toast: &mut Option<(u64, String)>, id: u64) {
    if matches!(toast, Some((current, _)) if *current == id) {
        *toast = None;
    }
}

#[component]
pub fn Toast() -> Element {
    // reruns, dropping the pending timer, whenever the toast changes
    let _ = use_resource(|| async move {
        let Some((id, _)) = TOAST() else {
            return;
        };

        TimeoutFuture::new(TOAST_MS).await;
        expire(&mut TOAST.write(), id);
    });

    let Some((_, message)) = TOAST() else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "toast",
            class: "fixed top-5 right-5 z-70",
            div {
                class: "bg-red-500 p-4 rounded-lg shadow-lg w-72 flex justify-between items-center",
                p {
                    id: "toast-content",
                    class: "text-white text-sm",
                    "{message}"
                }
                button {
                    r#type: "button",
                    class: "text-white font-bold ms-3",
                    onclick: move |_| *TOAST.write() = None,
                    "×"
                }
            }
        }
    }
}
