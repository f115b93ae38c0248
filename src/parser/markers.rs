//! Marker location and segment slicing.
//!
//! The generated text delimits its sections with fixed literal markers.
//! Matching is ASCII-case-insensitive; the markers themselves are pure
//! ASCII, so every reported byte offset is a valid char boundary even when
//! the surrounding text is not ASCII.

pub const TITLE_MARKER: &str = "title:";
pub const INGREDIENTS_MARKER: &str = "ingredients:";
pub const DIRECTIONS_MARKER: &str = "directions:";

/// Byte offset of the first case-insensitive occurrence of `marker` in
/// `text`, searching at or after `from`.
pub fn find_marker(text: &str, marker: &str, from: usize) -> Option<usize> {
    let haystack = text.as_bytes().get(from..)?;
    let needle = marker.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|at| from + at)
}

/// Text after the first occurrence of `marker`, to the end of input.
pub fn segment_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    find_marker(text, marker, 0).map(|at| &text[at + marker.len()..])
}

/// Text between the first occurrence of `start` and the next occurrence of
/// `end` after it, or to the end of input when `end` never appears.
pub fn segment_between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = find_marker(text, start, 0)? + start.len();
    let until = find_marker(text, end, from).unwrap_or(text.len());
    Some(&text[from..until])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker_is_case_insensitive() {
        assert_eq!(find_marker("TITLE: Soup", TITLE_MARKER, 0), Some(0));
        assert_eq!(find_marker("My Title: Soup", TITLE_MARKER, 0), Some(3));
        assert_eq!(find_marker("no markers here", TITLE_MARKER, 0), None);
    }

    #[test]
    fn test_find_marker_respects_start_offset() {
        let text = "ingredients: a Ingredients: b";
        assert_eq!(find_marker(text, INGREDIENTS_MARKER, 0), Some(0));
        assert_eq!(find_marker(text, INGREDIENTS_MARKER, 1), Some(15));
        assert_eq!(find_marker(text, INGREDIENTS_MARKER, 16), None);
    }

    #[test]
    fn test_segment_after() {
        assert_eq!(
            segment_after("Directions: Heat oil.", DIRECTIONS_MARKER),
            Some(" Heat oil.")
        );
        assert_eq!(segment_after("Heat oil.", DIRECTIONS_MARKER), None);
    }

    #[test]
    fn test_segment_between_stops_at_end_marker() {
        let text = "Ingredients: 2 eggs Directions: Whisk.";
        assert_eq!(
            segment_between(text, INGREDIENTS_MARKER, DIRECTIONS_MARKER),
            Some(" 2 eggs ")
        );
    }

    #[test]
    fn test_segment_between_runs_to_end_without_end_marker() {
        let text = "Ingredients: 2 eggs and a cup of flour";
        assert_eq!(
            segment_between(text, INGREDIENTS_MARKER, DIRECTIONS_MARKER),
            Some(" 2 eggs and a cup of flour")
        );
    }

    #[test]
    fn test_offsets_stay_on_char_boundaries_with_unicode_text() {
        let text = "Crème brûlée — Ingredients: 2 cups sugar";
        let segment = segment_between(text, INGREDIENTS_MARKER, DIRECTIONS_MARKER);
        assert_eq!(segment, Some(" 2 cups sugar"));
    }
}
