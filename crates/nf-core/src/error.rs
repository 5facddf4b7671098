/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when resolving names against the static content tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// No item matches the given id or name.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// No recipe matches the given id.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// No building type matches the given name.
    #[error("Unknown building type: {0}")]
    UnknownBuildingType(String),

    /// A layout template has no rows or ragged rows.
    #[error("malformed template for {0}")]
    MalformedTemplate(String),
}
