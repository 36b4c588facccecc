use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Invalid alert type \"{0}\".")]
    InvalidAlertType(String),

    #[error("The \"label\" option is required.")]
    MissingLabel,

    #[error("The \"label\" option must be a string.")]
    LabelNotString,

    #[error("The \"label\" cannot be an empty string.")]
    EmptyLabel,

    #[error("Invalid item definition: {0}")]
    InvalidDefinition(String),
}
