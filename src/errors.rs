use aws_sdk_dynamodb::error::SdkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupsError {
    #[error("Failed to parse request body: {0}")]
    ParseError(String),

    #[error("Invalid query parameter: {0}")]
    ValidationError(String),

    #[error("Failed to access storage: {0}")]
    StoreError(String),

    #[error("Failed to convert stored attribute: {0}")]
    ConversionError(String),

    #[error("Missing or invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for GroupsError {
    fn from(error: serde_json::Error) -> Self {
        GroupsError::ParseError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for GroupsError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        // Display on SdkError only prints the variant name, the source carries the service message
        let detail = aws_sdk_dynamodb::error::DisplayErrorContext(&error);
        GroupsError::StoreError(format!("{detail}"))
    }
}
