use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Error response tagged with the form field it belongs to, for inline display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FieldErrorDto {
    /// The error message
    pub error: String,
    /// Name of the field the error applies to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
