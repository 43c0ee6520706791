//! The poem workspace: generator on one side, saved poems on the other.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It kicks off the first list load on mount; every
//! later reload is triggered by a successful save, delete or import.

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::components::poem_list::PoemList;
use crate::components::poem_panel::PoemPanel;
use crate::components::toolbar::Toolbar;
use crate::state::PoemSignals;

#[component]
pub fn HomePage() -> impl IntoView {
    let signals = expect_context::<PoemSignals>();
    signals.spawn(|workflow| async move { workflow.start().await });

    view! {
        <div class="poet-page">
            <Toolbar/>
            <NoticeBanner/>
            <main class="poet-page__body">
                <PoemPanel/>
                <PoemList/>
            </main>
        </div>
    }
}
