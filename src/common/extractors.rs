use axum_macros::{FromRequest, FromRequestParts};

use crate::services::response::ServiceError;

/// `axum::Json` whose rejection is reported as a [`ServiceError::ValidationError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` whose rejection is reported as a 404.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ServiceError))]
pub struct AppPath<T>(pub T);
