use super::*;
use poems::PreviewState;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| (*l).to_owned()).collect()
}

#[test]
fn draft_renders_lines_only() {
    let display = PoemDisplay::Poem { title: None, lines: lines(&["a", "b"]) };
    assert_eq!(poem(&display).as_deref(), Some("a\nb\n"));
}

#[test]
fn saved_poem_renders_heading() {
    let display = PoemDisplay::Poem { title: Some("Ode".to_owned()), lines: lines(&["a"]) };
    assert_eq!(poem(&display).as_deref(), Some("# Ode\n\na\n"));
}

#[test]
fn nothing_rendered_without_a_poem() {
    assert_eq!(poem(&PoemDisplay::Empty), None);
    assert_eq!(poem(&PoemDisplay::Pending), None);
    assert_eq!(poem(&PoemDisplay::Failed("offline".to_owned())), None);
}

#[test]
fn summaries_indent_previews() {
    let list = vec![
        PoemSummary { title: "t1".to_owned(), preview: PreviewState::Resolved("a\nb".to_owned()) },
        PoemSummary { title: "t2".to_owned(), preview: PreviewState::Failed },
    ];
    assert_eq!(summaries(&list), "t1\n    a\n    b\nt2\n    failed to load\n");
}

#[test]
fn empty_list_renders_nothing() {
    assert_eq!(summaries(&[]), "");
}
