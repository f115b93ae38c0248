//! Quantity+unit boundary scanning for ingredient splitting.
//!
//! A new ingredient entry begins wherever a quantity appears: a run of
//! digits, optional whitespace, then a recognized measurement word. The
//! boundary sits at the start of the digit run, so the quantity stays
//! attached to the entry it introduces.

/// Measurement words and abbreviations that mark the start of a new
/// ingredient entry when preceded by a quantity. Matched case-insensitively
/// as prefixes; longer spellings are listed before their shorter forms.
const UNIT_KEYWORDS: &[&str] = &[
    "tablespoons",
    "tablespoon",
    "teaspoons",
    "teaspoon",
    "pounds",
    "pound",
    "ounces",
    "ounce",
    "slices",
    "slice",
    "cups",
    "cup",
    "can",
    "tbsp",
    "tsp",
    "lbs",
    "lb",
    "oz",
];

fn starts_with_unit(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    UNIT_KEYWORDS.iter().any(|unit| {
        bytes.len() >= unit.len() && bytes[..unit.len()].eq_ignore_ascii_case(unit.as_bytes())
    })
}

/// True when a quantity+unit pattern begins at byte offset `at`: a maximal
/// digit run, optional whitespace, then a unit keyword. Offsets inside a
/// digit run are not boundaries.
fn is_quantity_boundary(text: &str, at: usize) -> bool {
    let bytes = text.as_bytes();
    if !bytes[at].is_ascii_digit() {
        return false;
    }
    if at > 0 && bytes[at - 1].is_ascii_digit() {
        return false;
    }
    let mut after_digits = at;
    while after_digits < bytes.len() && bytes[after_digits].is_ascii_digit() {
        after_digits += 1;
    }
    starts_with_unit(text[after_digits..].trim_start())
}

/// Byte offsets, in ascending order, of every quantity+unit boundary in
/// `text`. Every offset is a char boundary (it points at an ASCII digit).
pub fn quantity_boundaries(text: &str) -> Vec<usize> {
    (0..text.len())
        .filter(|&at| is_quantity_boundary(text, at))
        .collect()
}
