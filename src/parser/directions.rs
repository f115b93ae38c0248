use log::debug;

use super::FieldInput;

type Strategy = fn(&FieldInput) -> Option<Vec<String>>;

/// Tried in order; the first strategy yielding steps wins.
const FALLBACKS: &[Strategy] = &[sentence_steps, whole_segment_step, whole_text_step];

pub(super) fn extract(input: &FieldInput) -> Vec<String> {
    FALLBACKS
        .iter()
        .find_map(|strategy| strategy(input))
        .unwrap_or_default()
}

/// The directions segment is the text after the `directions:` marker; with
/// no marker the whole input stands in for it.
fn segment<'a>(input: &FieldInput<'a>) -> &'a str {
    input.segment.unwrap_or(input.raw)
}

/// Split the segment into sentence-like steps at each period followed by
/// whitespace.
fn sentence_steps(input: &FieldInput) -> Option<Vec<String>> {
    let steps: Vec<String> = split_sentences(segment(input))
        .into_iter()
        .filter_map(normalize_step)
        .collect();

    if steps.is_empty() {
        None
    } else {
        debug!("split directions segment into {} steps", steps.len());
        Some(steps)
    }
}

/// The whole segment as the sole step.
fn whole_segment_step(input: &FieldInput) -> Option<Vec<String>> {
    normalize_step(segment(input)).map(|step| {
        debug!("no sentence boundaries in directions segment, keeping it whole");
        vec![step]
    })
}

/// The entire raw text as the sole step; last resort for a marker with
/// nothing usable after it.
fn whole_text_step(input: &FieldInput) -> Option<Vec<String>> {
    normalize_step(input.raw).map(|step| vec![step])
}

/// Sentence boundaries are a period followed by whitespace; the period and
/// the whitespace run are consumed as the separator.
fn split_sentences(segment: &str) -> Vec<&str> {
    let bytes = segment.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let boundary = bytes[i] == b'.'
            && bytes
                .get(i + 1)
                .map_or(false, |next| next.is_ascii_whitespace());
        if boundary {
            pieces.push(&segment[start..i]);
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }
    pieces.push(&segment[start..]);
    pieces
}

/// Trim the step and give it exactly one terminating period. Steps with no
/// content left after trimming are dropped.
fn normalize_step(piece: &str) -> Option<String> {
    let step = piece.trim().trim_end_matches('.').trim_end();
    if step.is_empty() {
        None
    } else {
        Some(format!("{step}."))
    }
}
