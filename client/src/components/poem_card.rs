//! Card for one saved poem: title, preview and a delete button.

use leptos::prelude::*;
use poems::PreviewState;

use crate::state::PoemSignals;

/// A clickable card; clicking shows the full poem.
#[component]
pub fn PoemCard(title: String, preview: PreviewState) -> impl IntoView {
    let signals = expect_context::<PoemSignals>();
    let pending = preview == PreviewState::Pending;
    let failed = preview == PreviewState::Failed;
    let preview_text = preview.text().to_owned();

    let view_title = title.clone();
    let on_view = move |_| {
        let title = view_title.clone();
        signals.spawn(|workflow| async move {
            let _ = workflow.view(&title).await;
        });
    };
    let delete_title = title.clone();
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let title = delete_title.clone();
        signals.spawn(|workflow| async move {
            let _ = workflow.delete(&title).await;
        });
    };

    view! {
        <div class="poem-card" on:click=on_view role="button" tabindex="0">
            <div class="poem-card__header">
                <span class="poem-card__title">{title}</span>
                <button
                    class="poem-card__delete"
                    on:click=on_delete
                    title="Delete poem"
                    aria-label="Delete poem"
                >
                    "✕"
                </button>
            </div>
            <pre
                class="poem-card__preview"
                class:poem-card__preview--pending=pending
                class:poem-card__preview--failed=failed
            >
                {preview_text}
            </pre>
        </div>
    }
}
