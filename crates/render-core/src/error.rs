use thiserror::Error;

/// Failures while assembling a PDF or rendering the printable document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF assembly failed: {0}")]
    Pdf(String),
    #[error("Printable template failed to render: {0}")]
    Template(#[from] handlebars::RenderError),
    #[error("Printable template is invalid: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
