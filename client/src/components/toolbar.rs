//! Top bar with the app title and the theme toggle.

use leptos::prelude::*;

use crate::state::PoemSignals;
use crate::state::ui::UiState;
use crate::util::dark_mode::BrowserPreference;

#[component]
pub fn Toolbar() -> impl IntoView {
    let signals = expect_context::<PoemSignals>();
    let preference = expect_context::<RwSignal<BrowserPreference>>();

    let on_toggle = move |_| {
        if let Some(appearance) = preference.try_update(BrowserPreference::toggle) {
            signals.ui.update(|u| u.appearance = appearance);
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Electronic Poet"</span>
            <span class="toolbar__spacer"></span>
            <button class="btn toolbar__dark-toggle" on:click=on_toggle title="Toggle dark mode">
                {move || signals.ui.with(UiState::toggle_glyph)}
            </button>
        </header>
    }
}
