use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Catalog JSON error: {0}")]
    Json(String),

    #[error("Invalid {registry} entry '{id}': {reason}")]
    InvalidEntry {
        registry: &'static str,
        id: String,
        reason: String,
    },

    #[error("Template '{template}' uses unknown effect flag '{flag}'")]
    UnknownEffect { template: String, flag: String },

    #[error("Duplicate {registry} id '{id}'")]
    Duplicate { registry: &'static str, id: String },

    #[error("Catalog has no '{id}' {registry}, which is required as the fallback")]
    MissingDefault { registry: &'static str, id: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err.to_string())
    }
}

impl CatalogError {
    pub(crate) fn invalid(registry: &'static str, id: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidEntry {
            registry,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
