//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ApiConfig;
use crate::pages::home::HomePage;
use crate::state::PoemSignals;
use crate::util::dark_mode::{self, BrowserColorScheme, BrowserPreference, LocalStoragePreference};

/// Root application component.
///
/// Provides the poem signals and the appearance preference, applies the
/// stored theme, and follows the system color scheme while it is `system`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let signals = PoemSignals::new(ApiConfig::from_build_env());
    provide_context(signals);

    let mut controller = BrowserPreference::new(LocalStoragePreference, BrowserColorScheme);
    let appearance = controller.initialize();
    signals.ui.update(|u| u.appearance = appearance);
    let preference = RwSignal::new(controller);
    provide_context(preference);

    dark_mode::on_color_scheme_change(move || {
        let changed = preference.try_update(|p| p.on_environment_signal_changed().then_some(p.resolved()));
        if let Some(appearance) = changed.flatten() {
            signals.ui.update(|u| u.appearance = appearance);
        }
    });

    view! {
        <Title text="Electronic Poet"/>
        <HomePage/>
    }
}
