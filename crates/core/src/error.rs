#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid ID format. Expected a UUID but received: {0}")]
    BadIdentifier(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
