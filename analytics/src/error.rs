use crate::models::ApiErrorResponse;
use thiserror::Error;

pub const GENERIC_REQUEST_FAILURE: &str = "リクエストに失敗しました";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("JSON parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// Uses the backend's `{"error": {"message": ...}}` envelope when the body
    /// carries one, the generic failure message otherwise.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|response| response.error)
            .and_then(|detail| detail.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_REQUEST_FAILURE.to_string());

        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_uses_backend_message() {
        let body = r#"{"error":{"code":"NOT_FOUND","message":"指定されたチャンネルが見つかりませんでした"}}"#;
        let error = ApiError::from_response_body(404, body);
        assert_eq!(
            error,
            ApiError::Http {
                status: 404,
                message: "指定されたチャンネルが見つかりませんでした".to_string(),
            }
        );
        assert_eq!(error.to_string(), "指定されたチャンネルが見つかりませんでした");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_numeric_error_code_is_accepted() {
        let body = r#"{"error":{"code":500,"message":"boom","details":null}}"#;
        assert_eq!(ApiError::from_response_body(500, body).to_string(), "boom");
    }

    #[test]
    fn test_falls_back_to_generic_message() {
        for body in ["", "<html>Bad Gateway</html>", r#"{"error":null}"#, r#"{"error":{"message":""}}"#] {
            assert_eq!(
                ApiError::from_response_body(502, body).to_string(),
                GENERIC_REQUEST_FAILURE
            );
        }
    }

    #[test]
    fn test_other_variants_have_no_status() {
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert_eq!(
            ApiError::Decode("missing field".into()).to_string(),
            "JSON parse error: missing field"
        );
    }
}
