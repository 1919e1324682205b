//! Transient feedback banner for comparison actions.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Show `message` and schedule its dismissal after `dismiss_ms` (browser only).
pub fn flash_notice(ui: RwSignal<UiState>, kind: NoticeKind, message: &str, dismiss_ms: u32) {
    let Some(seq) = ui.try_update(|u| u.show_notice(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(dismiss_ms, move || {
            ui.update(|u| u.dismiss_notice(seq));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, dismiss_ms);
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Warning => "notice notice--warning",
    }
}

/// Banner rendering the current notice, if any.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().notice.map(|notice| {
            let seq = notice.seq;
            view! {
                <div class=notice_class(notice.kind) role="status">
                    <span class="notice__message">{notice.message}</span>
                    <button
                        class="notice__close"
                        aria-label="Dismiss"
                        on:click=move |_| ui.update(|u| u.dismiss_notice(seq))
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
