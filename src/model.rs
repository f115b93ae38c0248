use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured recipe extracted from one generated text blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

impl fmt::Display for ParsedRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }
        writeln!(f)?;
        writeln!(f, "Directions:")?;
        for (i, direction) in self.directions.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, direction)?;
        }
        Ok(())
    }
}

/// Request body accepted by the recipe persistence endpoint.
///
/// The first three fields map directly from [`ParsedRecipe`];
/// `original_ingredients` carries the comma-joined list the user submitted
/// to the generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SaveRecipePayload {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub original_ingredients: String,
}

impl SaveRecipePayload {
    pub fn new(recipe: ParsedRecipe, original_ingredients: impl Into<String>) -> Self {
        SaveRecipePayload {
            title: recipe.title,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
            original_ingredients: original_ingredients.into(),
        }
    }
}
