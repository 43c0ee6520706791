//! Plain-text poem import.
//!
//! Turns an uploaded file's text into the ordered, non-empty lines that make
//! up a poem. Pure functions only; the workflow decides when to call the
//! store.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use crate::error::ValidationError;

const TEXT_EXTENSION: &str = ".txt";

/// Split `raw` into poem lines.
///
/// Lines are split on `\n`, lose one trailing `\r`, and are dropped when they
/// contain only whitespace. Kept lines are otherwise unchanged.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyContent`] when no line survives.
pub fn parse(raw: &str) -> Result<Vec<String>, ValidationError> {
    let lines: Vec<String> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect();
    if lines.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(lines)
}

/// Whether a selected file may be imported.
///
/// The declared content type must be `text/plain` (parameters allowed).
/// Some platforms report no type at all; those files pass only with a `.txt`
/// name.
#[must_use]
pub fn is_text_file(file_name: &str, content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.is_empty() {
        return has_text_extension(file_name);
    }
    essence.eq_ignore_ascii_case("text/plain")
}

/// Title offered by default when importing `file_name`.
#[must_use]
pub fn default_title(file_name: &str) -> String {
    if has_text_extension(file_name) {
        file_name[..file_name.len() - TEXT_EXTENSION.len()].to_owned()
    } else {
        file_name.to_owned()
    }
}

fn has_text_extension(file_name: &str) -> bool {
    file_name.len() >= TEXT_EXTENSION.len()
        && file_name.is_char_boundary(file_name.len() - TEXT_EXTENSION.len())
        && file_name[file_name.len() - TEXT_EXTENSION.len()..].eq_ignore_ascii_case(TEXT_EXTENSION)
}
