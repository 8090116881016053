use axum::{
	body::Body,
	http::{HeaderName, HeaderValue, Method, Request, header},
	routing::get,
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

use crate::{
	common::request_id::{request_id, MakeRequestUuid, REQUEST_ID_HEADER},
	config::Config,
	dependencies::Dependency,
	services::{handlers::PostHandler, response::ServiceError},
};

pub fn post_routers() -> Router<Dependency> {
	Router::new()
		.route(
			"/",
			get(PostHandler::list)
				.post(PostHandler::create)
				.fallback(PostHandler::method_not_allowed),
		)
		.route(
			"/:id",
			get(PostHandler::get)
				.patch(PostHandler::update)
				.delete(PostHandler::delete)
				.fallback(PostHandler::method_not_allowed),
		)
}

/// Builds the service: `/posts` routes, JSON 404 fallback, request ids and tracing.
pub fn create_routes(dependency: Dependency) -> Router {
	let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

	Router::new()
		.nest("/posts", post_routers())
		.fallback(PostHandler::not_found)
		.with_state(dependency)
		.layer(
			ServiceBuilder::new()
				.layer(SetRequestIdLayer::new(request_id_header.clone(), MakeRequestUuid))
				.layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
					tracing::info_span!(
						"request",
						method = %request.method(),
						uri = %request.uri(),
						request_id = request_id(request),
					)
				}))
				.layer(PropagateRequestIdLayer::new(request_id_header)),
		)
}

pub fn cors_layer(config: &Config) -> Result<CorsLayer, ServiceError> {
	let origins = config.origins();
	let allow_origin = if origins.contains(&"*") {
		AllowOrigin::any()
	} else {
		let origins = origins
			.into_iter()
			.map(|origin| {
				origin
					.parse::<HeaderValue>()
					.map_err(|_| ServiceError::ConfigError(format!("invalid origin `{origin}` in ALLOW_ORIGINS")))
			})
			.collect::<Result<Vec<_>, _>>()?;
		AllowOrigin::list(origins)
	};

	Ok(CorsLayer::new()
		.allow_origin(allow_origin)
		.allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
		.allow_headers([header::CONTENT_TYPE]))
}
