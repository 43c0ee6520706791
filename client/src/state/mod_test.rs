use super::*;
use poems::{Notice, PoemDisplay};

fn offline() -> ApiConfig {
    ApiConfig { base_url: "http://127.0.0.1:9" }
}

// =============================================================
// SignalCell
// =============================================================

#[test]
fn signal_cell_reads_and_writes() {
    let owner = Owner::new();
    owner.with(|| {
        let cell = SignalCell(RwSignal::new(1_u32));
        let updated = cell.update_with(|v| {
            *v += 1;
            *v
        });
        assert_eq!(updated, Some(2));
        assert_eq!(cell.read_with(|v| *v), Some(2));
        assert_eq!(cell.0.get_untracked(), 2);
    });
}

#[test]
fn disposed_signal_cell_reports_gone() {
    let owner = Owner::new();
    owner.with(|| {
        let cell = SignalCell(RwSignal::new(String::from("poem")));
        cell.0.dispose();
        assert_eq!(cell.read_with(String::len), None);
        assert_eq!(cell.update_with(String::clear), None);
    });
}

// =============================================================
// PoemSignals
// =============================================================

#[test]
fn new_signals_start_empty() {
    let owner = Owner::new();
    owner.with(|| {
        let signals = PoemSignals::new(offline());
        assert_eq!(signals.workflow.get_untracked(), WorkflowState::default());
        assert!(signals.list.get_untracked().titles().is_empty());
        assert_eq!(signals.ui.get_untracked().notice, None);
    });
}

#[test]
#[cfg(not(feature = "csr"))]
fn invalid_line_count_is_reported_without_a_request() {
    let owner = Owner::new();
    owner.with(|| {
        let signals = PoemSignals::new(offline());
        signals.workflow.update(|w| w.line_input = "zero".to_owned());

        let result = futures::executor::block_on(signals.controller().generate());

        assert!(result.is_err());
        assert_eq!(signals.workflow.get_untracked().display, PoemDisplay::Empty);
        let notice = signals.ui.get_untracked().notice;
        assert!(notice.as_ref().is_some_and(Notice::is_error));
    });
}

#[test]
#[cfg(not(feature = "csr"))]
fn unreachable_store_renders_failed_list() {
    let owner = Owner::new();
    owner.with(|| {
        let signals = PoemSignals::new(offline());

        futures::executor::block_on(signals.controller().start());

        let list = signals.list.get_untracked();
        assert!(!list.is_loading());
        assert_eq!(list.error(), Some(poems::error::CONNECTIVITY_MESSAGE));
    });
}
