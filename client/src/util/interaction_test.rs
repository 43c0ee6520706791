#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn confirm_and_prompt_decline_off_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let interaction = BrowserInteraction::new(RwSignal::new(UiState::default()));
        assert!(!interaction.confirm("Delete the poem \"x\"?"));
        assert_eq!(interaction.prompt("Title for the imported poem:", "x"), None);
    });
}

#[test]
fn notify_replaces_banner_notice() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let interaction = BrowserInteraction::new(ui);

        interaction.notify(Notice::Info("Saved \"a\".".to_owned()));
        interaction.notify(Notice::Error("offline".to_owned()));

        assert_eq!(ui.get_untracked().notice, Some(Notice::Error("offline".to_owned())));
    });
}
