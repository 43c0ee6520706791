//! Saved-poem list with the import action.
//!
//! DESIGN
//! ======
//! Renders straight from `PoemListState`: the last applied titles, each with
//! its own preview state, plus the error from the last failed reload. The
//! import button forwards to a hidden file input.

use leptos::prelude::*;

use crate::components::poem_card::PoemCard;
use crate::state::PoemSignals;

#[component]
pub fn PoemList() -> impl IntoView {
    let signals = expect_context::<PoemSignals>();
    let list = signals.list;
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_import_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::file_import;

            let Some(input) = file_input.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                let picked = file_import::read_selected(&input).await;
                // Reset so picking the same file again fires `change`.
                input.set_value("");
                match picked {
                    Ok(Some(file)) => {
                        let _ = signals.controller().import(file).await;
                    }
                    Ok(None) => {}
                    Err(err) => file_import::report_unreadable(signals.ui, &err),
                }
            });
        }
    };

    view! {
        <section class="poem-list">
            <header class="poem-list__header">
                <h2>"Saved poems"</h2>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=on_import_click>
                    "Import"
                </button>
                <input
                    class="poem-list__file"
                    type="file"
                    accept=".txt,text/plain"
                    hidden=true
                    node_ref=file_input
                    on:change=on_file_change
                />
            </header>
            <Show when=move || list.with(|l| l.error().is_some())>
                <p class="poem-list__error">{move || list.with(|l| l.error().unwrap_or_default().to_owned())}</p>
            </Show>
            {move || {
                let (summaries, loading) = list.with(|l| (l.summaries(), l.is_loading()));
                if summaries.is_empty() {
                    let message = if loading { "Loading poems…" } else { "No saved poems yet." };
                    return view! { <p class="poem-list__empty">{message}</p> }.into_any();
                }
                view! {
                    <div class="poem-list__cards">
                        {summaries
                            .into_iter()
                            .map(|s| view! { <PoemCard title=s.title preview=s.preview/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
