//! Generator panel: line count, generate, the poem display and the save form.
//!
//! DESIGN
//! ======
//! Inputs are bound straight to `WorkflowState`, which the controller reads
//! when a flow starts. The save form is only rendered while a draft exists.

use leptos::prelude::*;
use poems::PoemDisplay;
use poems::workflow::DEFAULT_LINE_INPUT;

use crate::state::PoemSignals;

#[component]
pub fn PoemPanel() -> impl IntoView {
    let signals = expect_context::<PoemSignals>();
    let workflow = signals.workflow;

    let generate = Callback::new(move |()| {
        signals.spawn(|workflow| async move {
            let _ = workflow.generate().await;
        });
    });
    let save = Callback::new(move |()| {
        signals.spawn(|workflow| async move {
            let _ = workflow.save().await;
        });
    });

    view! {
        <section class="poem-panel">
            <div class="poem-panel__controls">
                <label class="poem-panel__label">
                    "Lines"
                    <input
                        class="poem-panel__lines"
                        type="number"
                        min="1"
                        placeholder=DEFAULT_LINE_INPUT
                        prop:value=move || workflow.with(|w| w.line_input.clone())
                        on:input=move |ev| workflow.update(|w| w.line_input = event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                generate.run(());
                            }
                        }
                    />
                </label>
                <button class="btn btn--primary" on:click=move |_| generate.run(())>
                    "Generate"
                </button>
            </div>

            <article class="poem-panel__display">
                {move || render_display(workflow.with(|w| w.display.clone()))}
            </article>

            <Show when=move || workflow.with(poems::WorkflowState::save_available)>
                <div class="poem-panel__save">
                    <input
                        class="poem-panel__title"
                        type="text"
                        placeholder="Title"
                        prop:value=move || workflow.with(|w| w.title_input.clone())
                        on:input=move |ev| workflow.update(|w| w.title_input = event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save.run(());
                            }
                        }
                    />
                    <button class="btn" on:click=move |_| save.run(())>
                        "Save"
                    </button>
                </div>
            </Show>
        </section>
    }
}

fn render_display(display: PoemDisplay) -> AnyView {
    match display {
        PoemDisplay::Empty => {
            view! { <p class="poem-panel__hint">"Pick a line count and generate a poem."</p> }.into_any()
        }
        PoemDisplay::Pending => view! { <p class="poem-panel__hint">"Generating…"</p> }.into_any(),
        PoemDisplay::Poem { title, lines } => view! {
            {title.map(|t| view! { <h2 class="poem-panel__heading">{t}</h2> })}
            <div class="poem-panel__lines-out">
                {lines.into_iter().map(|line| view! { <p class="poem-panel__line">{line}</p> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        PoemDisplay::Failed(message) => view! { <p class="poem-panel__error">{message}</p> }.into_any(),
    }
}
