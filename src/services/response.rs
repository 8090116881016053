use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::post::Post;

#[derive(Debug)]
pub enum ServiceResponse {
	Created(Post),
	Post(Post),
	Posts(Vec<Post>),
	Empty(()),
}

impl From<Post> for ServiceResponse {
	fn from(value: Post) -> Self {
		ServiceResponse::Post(value)
	}
}

impl From<Vec<Post>> for ServiceResponse {
	fn from(value: Vec<Post>) -> Self {
		ServiceResponse::Posts(value)
	}
}

impl From<()> for ServiceResponse {
	fn from(_value: ()) -> Self {
		ServiceResponse::Empty(())
	}
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		match self {
			ServiceResponse::Created(post) => (StatusCode::CREATED, Json(post)).into_response(),
			ServiceResponse::Post(post) => Json(post).into_response(),
			ServiceResponse::Posts(posts) => Json(posts).into_response(),
			ServiceResponse::Empty(()) => StatusCode::NO_CONTENT.into_response(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("post {0} not found")]
	EntityNotFound(i64),
	#[error("resource not found")]
	RouteNotFound,
	#[error("method not allowed")]
	MethodNotAllowed,
	#[error("{message}")]
	ValidationError { status: StatusCode, message: String },
	#[error("storage failure: {0}")]
	StorageFailure(#[from] sqlx::Error),
	#[error("configuration error: {0}")]
	ConfigError(String),
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::EntityNotFound(_) | ServiceError::RouteNotFound => StatusCode::NOT_FOUND,
			ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			ServiceError::ValidationError { status, .. } => *status,
			ServiceError::StorageFailure(_)
			| ServiceError::ConfigError(_)
			| ServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<JsonRejection> for ServiceError {
	fn from(rejection: JsonRejection) -> Self {
		ServiceError::ValidationError {
			status: rejection.status(),
			message: rejection.body_text(),
		}
	}
}

// A non-integer id can never name a post.
impl From<PathRejection> for ServiceError {
	fn from(rejection: PathRejection) -> Self {
		tracing::debug!("Path rejected: {}", rejection.body_text());
		ServiceError::RouteNotFound
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		let message = if status.is_server_error() {
			tracing::error!("Request failed: {}", self);
			"internal server error".to_string()
		} else {
			self.to_string()
		};
		(status, Json(json!({ "error": message }))).into_response()
	}
}
