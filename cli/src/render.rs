//! Plain-text rendering of poems and the saved list for stdout.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use poems::{PoemDisplay, PoemSummary};

/// Text of a displayed poem, titled when it is a saved one. `None` unless a
/// poem is on display.
pub fn poem(display: &PoemDisplay) -> Option<String> {
    let PoemDisplay::Poem { title, lines } = display else {
        return None;
    };
    let mut out = String::new();
    if let Some(title) = title {
        let _ = writeln!(out, "# {title}\n");
    }
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
    Some(out)
}

/// One block per poem: the title, then its preview indented.
pub fn summaries(summaries: &[PoemSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        let _ = writeln!(out, "{}", summary.title);
        for line in summary.preview.text().lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}
