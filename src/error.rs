use thiserror::Error;

/// Errors that can occur on the crate surface.
///
/// The parser itself is infallible; these cover reading input and
/// serializing output around it.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to read the raw recipe text
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the parsed recipe
    #[error("Failed to serialize recipe: {0}")]
    Json(#[from] serde_json::Error),

    /// Input was empty where a structured record was required
    #[error("Input text is empty")]
    EmptyInput,
}
