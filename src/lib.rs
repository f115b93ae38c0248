pub mod error;
pub mod model;
pub mod parser;

pub use error::RecipeError;
pub use model::{ParsedRecipe, SaveRecipePayload};
pub use parser::DEFAULT_TITLE;

/// Parse generated recipe text into a structured record.
///
/// Returns `None` when the input is empty; the caller should then render
/// the raw text directly instead of a structured view.
pub fn parse_recipe(raw_text: &str) -> Option<ParsedRecipe> {
    parser::parse(raw_text)
}

/// Parse generated recipe text and serialize the record as pretty JSON.
pub fn parse_recipe_to_json(raw_text: &str) -> Result<String, RecipeError> {
    let recipe = parser::parse(raw_text).ok_or(RecipeError::EmptyInput)?;
    Ok(serde_json::to_string_pretty(&recipe)?)
}

/// Parse generated recipe text into the payload shape accepted by the
/// persistence endpoint. `original_ingredients` is the comma-joined
/// ingredient list the user submitted to the generation endpoint.
pub fn build_save_payload(
    raw_text: &str,
    original_ingredients: &str,
) -> Result<SaveRecipePayload, RecipeError> {
    let recipe = parser::parse(raw_text).ok_or(RecipeError::EmptyInput)?;
    Ok(SaveRecipePayload::new(recipe, original_ingredients))
}
