//! Dismissible banner for the last notice.

use leptos::prelude::*;

use crate::state::PoemSignals;
use crate::state::ui::UiState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let signals = expect_context::<PoemSignals>();
    let ui = signals.ui;

    view! {
        {move || {
            ui.with(|u| u.notice.clone())
                .map(|notice| {
                    view! {
                        <div class="notice" class:notice--error=notice.is_error() role="status">
                            <span class="notice__message">{notice.message().to_owned()}</span>
                            <button
                                class="notice__dismiss"
                                on:click=move |_| ui.update(UiState::dismiss_notice)
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
