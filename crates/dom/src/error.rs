use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Element not found: {0}")]
    NotFound(String),

    #[error("Invalid selector: '{0}'")]
    InvalidSelector(String),
}
