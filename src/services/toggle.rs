//! Pronoun toggle rule.

use crate::models::PronounOption;

/// Computes the new tag list after a button click.
///
/// The clear option always yields an empty list. Any other option is removed if
/// its label is present and appended otherwise, so a label is never duplicated.
/// Clicking the same button twice restores the same tags; a removed label comes
/// back at the end.
pub fn toggle(tags: &[String], selected: &PronounOption) -> Vec<String> {
    if selected.is_clear {
        return Vec::new();
    }

    let mut next = tags.to_vec();
    match next.iter().position(|tag| *tag == selected.label) {
        Some(index) => {
            next.remove(index);
        }
        None => next.push(selected.label.clone()),
    }
    next
}
