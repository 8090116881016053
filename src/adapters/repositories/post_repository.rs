use crate::{
	domain::post::{CreatePost, Post, UpdatePost},
	services::response::ServiceError,
};

use super::Repository;

impl Repository {
	pub async fn list(&self) -> Result<Vec<Post>, ServiceError> {
		let posts = sqlx::query_as::<_, Post>("SELECT id, title, content FROM post ORDER BY id")
			.fetch_all(self.executor.connection())
			.await?;
		Ok(posts)
	}

	pub async fn get(
		&self,
		id: i64,
	) -> Result<Post, ServiceError> {
		sqlx::query_as::<_, Post>("SELECT id, title, content FROM post WHERE id = ?")
			.bind(id)
			.fetch_optional(self.executor.connection())
			.await?
			.ok_or(ServiceError::EntityNotFound(id))
	}

	pub async fn add(
		&mut self,
		command: CreatePost,
	) -> Result<Post, ServiceError> {
		let post = sqlx::query_as::<_, Post>("INSERT INTO post (title, content) VALUES (?, ?) RETURNING id, title, content")
			.bind(command.title)
			.bind(command.content)
			.fetch_one(self.executor.connection())
			.await?;
		Ok(post)
	}

	/// Patches one post in a single statement; absent fields keep their stored value.
	pub async fn update(
		&mut self,
		id: i64,
		command: UpdatePost,
	) -> Result<Post, ServiceError> {
		let (set_title, title) = split_field(command.title);
		let (set_content, content) = split_field(command.content);

		sqlx::query_as::<_, Post>(
			"UPDATE post SET \
				title = CASE WHEN ?1 THEN ?2 ELSE title END, \
				content = CASE WHEN ?3 THEN ?4 ELSE content END \
			WHERE id = ?5 RETURNING id, title, content",
		)
		.bind(set_title)
		.bind(title)
		.bind(set_content)
		.bind(content)
		.bind(id)
		.fetch_optional(self.executor.connection())
		.await?
		.ok_or(ServiceError::EntityNotFound(id))
	}

	pub async fn delete(
		&mut self,
		id: i64,
	) -> Result<(), ServiceError> {
		let result = sqlx::query("DELETE FROM post WHERE id = ?")
			.bind(id)
			.execute(self.executor.connection())
			.await?;
		if result.rows_affected() == 0 {
			return Err(ServiceError::EntityNotFound(id));
		}
		Ok(())
	}
}

fn split_field(field: Option<Option<String>>) -> (bool, Option<String>) {
	match field {
		Some(value) => (true, value),
		None => (false, None),
	}
}

#[cfg(test)]
mod test {
	use crate::{
		dependencies::Dependency,
		domain::post::{CreatePost, UpdatePost},
		services::response::ServiceError,
	};

	fn create(
		title: &str,
		content: &str,
	) -> CreatePost {
		CreatePost {
			title: Some(title.to_string()),
			content: Some(content.to_string()),
		}
	}

	#[tokio::test]
	async fn test_add_then_get() {
		'_given: {
			let dependency = Dependency::in_memory().await;
			let mut repository = dependency.repository();

			'_when: {
				let created = repository.add(create("A", "B")).await.unwrap();

				'_then: {
					let fetched = repository.get(created.id).await.unwrap();
					assert_eq!(fetched, created);
					assert_eq!(fetched.title.as_deref(), Some("A"));
					assert_eq!(fetched.content.as_deref(), Some("B"));
				}
			}
		}
	}

	#[tokio::test]
	async fn test_list_returns_insertion_order() {
		let dependency = Dependency::in_memory().await;
		let mut repository = dependency.repository();

		for i in 0..3 {
			repository.add(create(&format!("title {i}"), &format!("content {i}"))).await.unwrap();
		}

		let posts = repository.list().await.unwrap();
		assert_eq!(posts.len(), 3);
		for (i, post) in posts.iter().enumerate() {
			assert_eq!(post.title, Some(format!("title {i}")));
			assert_eq!(post.content, Some(format!("content {i}")));
		}
		assert!(posts.windows(2).all(|pair| pair[0].id < pair[1].id));
	}

	#[tokio::test]
	async fn test_update_is_partial() {
		let dependency = Dependency::in_memory().await;
		let mut repository = dependency.repository();
		let created = repository.add(create("A", "B")).await.unwrap();

		let updated = repository
			.update(
				created.id,
				UpdatePost {
					title: Some(Some("X".into())),
					content: None,
				},
			)
			.await
			.unwrap();
		assert_eq!(updated.title.as_deref(), Some("X"));
		assert_eq!(updated.content.as_deref(), Some("B"));
		assert_eq!(repository.get(created.id).await.unwrap(), updated);

		let unchanged = repository.update(created.id, UpdatePost::default()).await.unwrap();
		assert_eq!(unchanged, updated);
	}

	#[tokio::test]
	async fn test_update_missing_post_is_not_found() {
		let dependency = Dependency::in_memory().await;
		let mut repository = dependency.repository();

		let err = repository.update(42, UpdatePost::default()).await.unwrap_err();
		assert!(matches!(err, ServiceError::EntityNotFound(42)));
		assert!(repository.list().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_update_with_null_clears_only_that_field() {
		let dependency = Dependency::in_memory().await;
		let mut repository = dependency.repository();
		let created = repository.add(create("A", "B")).await.unwrap();

		let updated = repository
			.update(
				created.id,
				UpdatePost {
					title: None,
					content: Some(None),
				},
			)
			.await
			.unwrap();
		assert_eq!(updated.title.as_deref(), Some("A"));
		assert_eq!(updated.content, None);
	}

	#[tokio::test]
	async fn test_deleted_ids_are_not_reused() {
		let dependency = Dependency::in_memory().await;
		let mut repository = dependency.repository();

		let first = repository.add(create("A", "B")).await.unwrap();
		repository.delete(first.id).await.unwrap();

		assert!(matches!(repository.get(first.id).await, Err(ServiceError::EntityNotFound(_))));
		assert!(matches!(repository.delete(first.id).await, Err(ServiceError::EntityNotFound(_))));

		let second = repository.add(create("C", "D")).await.unwrap();
		assert!(second.id > first.id);
	}
}
