use axum::extract::State;

use crate::{
	common::extractors::{AppJson, AppPath},
	dependencies::Dependency,
	domain::post::{CreatePost, UpdatePost},
};

use super::response::{ServiceError, ServiceResponse};

pub struct PostHandler;
impl PostHandler {
	/// `GET /posts`
	pub async fn list(State(dependency): State<Dependency>) -> Result<ServiceResponse, ServiceError> {
		let posts = dependency.repository().list().await?;
		tracing::debug!("Listing {} posts", posts.len());
		Ok(posts.into())
	}

	/// `POST /posts`
	pub async fn create(
		State(dependency): State<Dependency>,
		AppJson(command): AppJson<CreatePost>,
	) -> Result<ServiceResponse, ServiceError> {
		let post = dependency.repository().add(command).await?;
		tracing::info!("Created post {}", post.id);
		Ok(ServiceResponse::Created(post))
	}

	/// `GET /posts/{id}`
	pub async fn get(
		State(dependency): State<Dependency>,
		AppPath(id): AppPath<i64>,
	) -> Result<ServiceResponse, ServiceError> {
		Ok(dependency.repository().get(id).await?.into())
	}

	/// `PATCH /posts/{id}`
	pub async fn update(
		State(dependency): State<Dependency>,
		AppPath(id): AppPath<i64>,
		AppJson(command): AppJson<UpdatePost>,
	) -> Result<ServiceResponse, ServiceError> {
		if command.is_empty() {
			tracing::debug!("Empty update for post {}", id);
		}
		let post = dependency.repository().update(id, command).await?;
		tracing::info!("Updated post {}", id);
		Ok(post.into())
	}

	/// `DELETE /posts/{id}`
	pub async fn delete(
		State(dependency): State<Dependency>,
		AppPath(id): AppPath<i64>,
	) -> Result<ServiceResponse, ServiceError> {
		dependency.repository().delete(id).await?;
		tracing::info!("Deleted post {}", id);
		Ok(().into())
	}

	/// Anything the router does not know.
	pub async fn not_found() -> ServiceError {
		ServiceError::RouteNotFound
	}

	/// A known path hit with a verb it does not serve.
	pub async fn method_not_allowed() -> ServiceError {
		ServiceError::MethodNotAllowed
	}
}
