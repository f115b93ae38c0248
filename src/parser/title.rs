use log::debug;

use super::markers::{self, INGREDIENTS_MARKER, TITLE_MARKER};

/// Placeholder used when the text carries no usable title.
pub const DEFAULT_TITLE: &str = "Delicious Recipe";

/// Extract the recipe title. This pass cannot fail: absent or blank title
/// segments fall back to [`DEFAULT_TITLE`].
pub(super) fn extract(raw: &str) -> String {
    marker_title(raw).unwrap_or_else(|| {
        debug!("no usable title segment, using placeholder");
        DEFAULT_TITLE.to_string()
    })
}

/// The title segment runs from the end of the `title:` marker to the
/// `ingredients:` marker or the first literal period, whichever comes first.
fn marker_title(raw: &str) -> Option<String> {
    let tail = markers::segment_after(raw, TITLE_MARKER)?;

    let marker_at = markers::find_marker(tail, INGREDIENTS_MARKER, 0);
    let period_at = tail.find('.');
    let until = match (marker_at, period_at) {
        (Some(marker), Some(period)) => marker.min(period),
        (Some(marker), None) => marker,
        (None, Some(period)) => period,
        (None, None) => tail.len(),
    };

    let title = tail[..until].trim();
    if title.is_empty() {
        None
    } else {
        Some(sentence_case(title))
    }
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
