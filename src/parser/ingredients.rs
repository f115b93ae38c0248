use log::debug;

use super::units;
use super::FieldInput;

type Strategy = fn(&FieldInput) -> Option<Vec<String>>;

/// Tried in order; the first strategy yielding entries wins. The final
/// whole-text strategy always succeeds for non-blank input, so the result
/// is never empty.
const FALLBACKS: &[Strategy] = &[split_entries, whole_segment, whole_text];

pub(super) fn extract(input: &FieldInput) -> Vec<String> {
    FALLBACKS
        .iter()
        .find_map(|strategy| strategy(input))
        .unwrap_or_default()
}

/// Split the ingredients segment at every quantity+unit boundary.
fn split_entries(input: &FieldInput) -> Option<Vec<String>> {
    let segment = input.segment?;
    let entries: Vec<String> = split_at_quantities(segment)
        .into_iter()
        .map(trim_entry)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        None
    } else {
        debug!("split ingredients segment into {} entries", entries.len());
        Some(entries)
    }
}

/// The unsplit segment as the sole entry, for segments where no quantity
/// pattern survives.
fn whole_segment(input: &FieldInput) -> Option<Vec<String>> {
    let segment = input.segment?.trim();
    if segment.is_empty() {
        None
    } else {
        debug!("no quantity boundaries in ingredients segment, keeping it whole");
        Some(vec![segment.to_string()])
    }
}

/// The entire raw text as the sole entry; taken when no `ingredients:`
/// marker exists at all.
fn whole_text(input: &FieldInput) -> Option<Vec<String>> {
    let raw = input.raw.trim();
    if raw.is_empty() {
        None
    } else {
        debug!("no ingredients marker found, using full text");
        Some(vec![raw.to_string()])
    }
}

/// Lookahead split: each boundary starts a new piece, so the quantity text
/// stays attached to the entry it introduces.
fn split_at_quantities(segment: &str) -> Vec<&str> {
    let boundaries = units::quantity_boundaries(segment);
    let mut pieces = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;
    for &at in &boundaries {
        pieces.push(&segment[start..at]);
        start = at;
    }
    pieces.push(&segment[start..]);
    pieces
}

fn trim_entry(piece: &str) -> String {
    piece
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';'))
        .to_string()
}
