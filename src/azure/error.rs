//! Errors returned by Azure Resource Manager calls.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmError {
    #[error("failed to get an access token: {0}")]
    Credential(#[from] azure_core::Error),

    #[error("request {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx answer, decoded from the ARM error envelope when possible.
    #[error("{}", api_text(.status, .code, .message))]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("error parsing response from {url}: path={path} error={message}")]
    Parse {
        url: String,
        path: String,
        message: String,
    },
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

// `409 RoleAssignmentExists: ...`, parts left out when ARM sent none.
fn api_text(status: &u16, code: &str, message: &str) -> String {
    match (code.is_empty(), message.is_empty()) {
        (false, false) => format!("{status} {code}: {message}"),
        (false, true) => format!("{status} {code}"),
        (true, false) => format!("{status}: {message}"),
        (true, true) => status.to_string(),
    }
}

impl ArmError {
    /// Build an [`ArmError::Api`] from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> ArmError {
        match serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.error)
        {
            Some(detail) => ArmError::Api {
                status,
                code: detail.code,
                message: detail.message,
            },
            None => ArmError::Api {
                status,
                code: String::new(),
                message: body.trim().to_string(),
            },
        }
    }

    /// HTTP 409, e.g. `RoleAssignmentExists`.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ArmError::Api { status: 409, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ArmError::Api { status: 404, .. })
    }

    /// Service message for API errors, full text otherwise.
    pub fn message(&self) -> String {
        match self {
            ArmError::Api { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}
