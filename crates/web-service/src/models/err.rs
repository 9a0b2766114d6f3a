use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use serde_json::json;
use thiserror::Error;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
///
/// 所有错误对请求来说都是终态，不做重试
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求缺少必填字段，转换为400
    #[error("{0} is required")]
    MissingField(&'static str),

    /// 仓库层数据库错误，NotFound转换为404，其余转换为500
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
///
/// 响应体统一是 `{"message": "..."}` 格式
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("{field} is required") })),
            )
                .into_response(),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound(msg) => {
                    (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response()
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": format!("Internal server error: {err}") })),
                )
                    .into_response(),
            },
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": format!("Something went wrong: {err}") })),
            )
                .into_response(),
        }
    }
}
