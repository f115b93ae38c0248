//! Rule-based extraction of structured recipes from generated free text.
//!
//! The generation endpoint returns loosely formatted text following the
//! `title: ... ingredients: ... directions: ...` convention, with no
//! guarantee that any marker is present. Each field is extracted by an
//! independent pass with its own ordered fallback chain, so the caller
//! always has something non-empty to render.

mod directions;
mod ingredients;
mod markers;
mod title;
mod units;

use log::debug;

use crate::model::ParsedRecipe;
use markers::{DIRECTIONS_MARKER, INGREDIENTS_MARKER};

pub use title::DEFAULT_TITLE;

/// Input shared by the fallback strategies of one extraction pass.
pub(crate) struct FieldInput<'a> {
    /// The unmodified generated text.
    raw: &'a str,
    /// The marker-delimited segment for this field, when its marker exists.
    segment: Option<&'a str>,
}

/// Parse one generated text blob into a structured recipe.
///
/// Returns `None` only for empty (or all-whitespace) input; the caller is
/// expected to show the raw text as-is in that case. Absence of structure
/// in non-empty input is not an error: every field degrades to a
/// whole-segment or whole-text fallback instead, and the function never
/// panics.
pub fn parse(raw_text: &str) -> Option<ParsedRecipe> {
    if raw_text.trim().is_empty() {
        debug!("empty input, nothing to parse");
        return None;
    }

    let title = title::extract(raw_text);

    let ingredients = ingredients::extract(&FieldInput {
        raw: raw_text,
        segment: markers::segment_between(raw_text, INGREDIENTS_MARKER, DIRECTIONS_MARKER),
    });

    let directions = directions::extract(&FieldInput {
        raw: raw_text,
        segment: markers::segment_after(raw_text, DIRECTIONS_MARKER),
    });

    Some(ParsedRecipe {
        title,
        ingredients,
        directions,
    })
}
