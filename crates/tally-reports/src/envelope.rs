//! The backend's uniform response envelope.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Wrapper every JSON endpoint of the backend returns.
///
/// A populated `result` signals success; on failure `result` is null or
/// absent and `message` explains what went wrong.
#[derive(Debug, Deserialize)]
pub struct ActionResult<T> {
    /// The payload, present on success.
    #[serde(default)]
    pub result: Option<T>,
    /// Backend message, populated on failure.
    #[serde(default)]
    pub message: String,
}

impl<T> ActionResult<T> {
    /// Extracts the payload, or surfaces the backend message as an error.
    pub fn into_result(self) -> ApiResult<T> {
        match self.result {
            Some(result) => Ok(result),
            None => Err(ApiError::Backend {
                message: self.message,
            }),
        }
    }
}
