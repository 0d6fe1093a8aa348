use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use larder_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("validation failed")]
    Validation(HashMap<String, Vec<String>>),

    #[error("internal server error")]
    InternalServerError,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    message,
                    errors: None,
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    message,
                    errors: None,
                },
            ),
            ApiError::Conflict(message) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    message,
                    errors: None,
                },
            ),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorBody {
                    message: "validation failed".to_string(),
                    errors: Some(errors),
                },
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    message: "internal server error".to_string(),
                    errors: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::SupplierNotFound => ApiError::NotFound("supplier not found".to_string()),
            CoreError::IngredientNotFound => {
                ApiError::NotFound("ingredient not found".to_string())
            }
            CoreError::NotFound => ApiError::NotFound("not found".to_string()),
            CoreError::AlreadyExists(what) => ApiError::Conflict(format!("{what} already exists")),
            CoreError::InternalServerError => ApiError::InternalServerError,
        }
    }
}

/// Json extractor that also runs the payload through its `Validate` impl and
/// rejects with per-field messages.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            let errors = errors
                .field_errors()
                .into_iter()
                .map(|(field, field_errors)| {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .clone()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect::<Vec<String>>();
                    (field.to_string(), messages)
                })
                .collect();
            ApiError::Validation(errors)
        })?;

        Ok(ValidateJson(value))
    }
}
