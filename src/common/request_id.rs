use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
	fn make_request_id<B>(
		&mut self,
		_request: &Request<B>,
	) -> Option<RequestId> {
		HeaderValue::from_str(&Uuid::new_v4().to_string()).ok().map(RequestId::new)
	}
}

/// Reads the id set by `SetRequestIdLayer`, or `-` if there is none.
pub fn request_id<B>(request: &Request<B>) -> &str {
	request
		.headers()
		.get(REQUEST_ID_HEADER)
		.and_then(|value| value.to_str().ok())
		.unwrap_or("-")
}
