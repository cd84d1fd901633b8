use crate::application::error::MediaError;

pub const FILE_NOT_FOUND: &str = "File not found";
pub const UNKNOWN_ERROR: &str = "Unknown error";

impl From<reqwest::Error> for MediaError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            MediaError::upstream("Request timeout").with_code("TIMEOUT")
        } else if error.is_connect() {
            MediaError::upstream(format!("Connection failed: {}", error)).with_code("CONNECT")
        } else if error.is_decode() {
            MediaError::upstream(format!("Invalid provider response: {}", error))
                .with_code("DECODE")
        } else if let Some(status) = error.status() {
            match status.as_u16() {
                404 => MediaError::not_found(error.to_string()),
                _ => MediaError::upstream(error.to_string())
                    .with_code(status.as_u16().to_string()),
            }
        } else {
            MediaError::upstream(error.to_string())
        }
    }
}

/// Builds the error for a non-success provider status, keeping the raw body
/// for diagnosis.
pub(crate) fn provider_failure(context: &str, status: reqwest::StatusCode, body: &str) -> MediaError {
    let detail = if body.trim().is_empty() {
        format!("status {}", status)
    } else {
        format!("status {}: {}", status, body.trim())
    };
    MediaError::upstream(format!("{}: {}", context, detail)).with_code(status.as_u16().to_string())
}
