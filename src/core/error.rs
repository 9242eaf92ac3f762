//! 核心错误处理模块

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use validator::ValidationErrors;

use crate::infrastructure::store::StoreError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 请求数据缺失或不合法 (400)
    #[error("{message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },
    /// 记录不存在或标识符无法解析 (404)
    #[error("{0}")]
    NotFound(String),
    /// 存储层失败 (500)
    #[error("{message}: {source}")]
    InternalServerError {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl CoreError {
    pub fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        CoreError::BadRequest {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        CoreError::InternalServerError {
            message: message.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message, detail) = match self {
            CoreError::BadRequest { message, detail } => ("BAD_REQUEST", message, detail),
            CoreError::NotFound(message) => ("NOT_FOUND", message, None),
            CoreError::InternalServerError { message, source } => {
                error!("{}: {}", message, source);
                ("INTERNAL_SERVER_ERROR", message, Some(source.to_string()))
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message,
            detail,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::bad_request("Invalid request body", rejection.body_text())
    }
}

/// 缺失或空白字段报告为 "All fields are required"，其余校验失败为 "Invalid student data"
impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        let message = if is_missing_field(&errors) {
            "All fields are required"
        } else {
            "Invalid student data"
        };
        CoreError::bad_request(message, validation_detail(&errors))
    }
}

fn is_missing_field(errors: &ValidationErrors) -> bool {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .any(|error| error.code == "required" || error.code == "length")
}

/// 将字段校验错误拼接为稳定顺序的描述
pub fn validation_detail(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::bad_request("bad", "detail").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::NotFound("missing".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::store("Error fetching students", StoreError::Unavailable("down".into()))
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_renders_500() {
        let response =
            CoreError::store("Error fetching students", StoreError::Unavailable("down".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_choose_message() {
        use crate::app::students::model::StudentInput;

        let missing = StudentInput::new("Ana", 20, " ").into_fields().unwrap_err();
        match CoreError::from(missing) {
            CoreError::BadRequest { message, detail } => {
                assert_eq!(message, "All fields are required");
                assert_eq!(detail.as_deref(), Some("major must not be empty"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let out_of_range = StudentInput::new("Ana", 0, "CS").into_fields().unwrap_err();
        match CoreError::from(out_of_range) {
            CoreError::BadRequest { message, .. } => assert_eq!(message, "Invalid student data"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_response_omits_empty_detail() {
        let body = ErrorResponse {
            error: "NOT_FOUND".to_string(),
            message: "Student not found".to_string(),
            detail: None,
            code: 404,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("detail").is_none());
        assert_eq!(value["code"], 404);
    }
}
