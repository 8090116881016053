use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::services::response::ServiceError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS post (
	id      INTEGER PRIMARY KEY AUTOINCREMENT,
	title   VARCHAR(50),
	content VARCHAR(255)
)
"#;

/// Per-request handle on the store.
///
/// Every operation is a single auto-committed statement against the pool.
pub struct DatabaseExecutor {
	pool: SqlitePool,
}

impl DatabaseExecutor {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub fn connection(&self) -> &SqlitePool {
		&self.pool
	}
}

/// Opens the pool, creating the database file if needed.
pub async fn connection_pool(
	url: &str,
	max_connections: u32,
) -> Result<SqlitePool, ServiceError> {
	let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
	let pool = SqlitePoolOptions::new()
		.max_connections(max_connections)
		.connect_with(options)
		.await
		.map_err(|err| {
			tracing::error!("Could not connect to {}: {}", url, err);
			ServiceError::StorageFailure(err)
		})?;
	Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), ServiceError> {
	sqlx::query(SCHEMA).execute(pool).await?;
	Ok(())
}

#[cfg(test)]
mod test {
	use super::{connection_pool, init_schema};

	#[tokio::test]
	async fn test_schema_creation_is_idempotent() {
		let pool = connection_pool("sqlite::memory:", 1).await.unwrap();
		init_schema(&pool).await.unwrap();
		init_schema(&pool).await.unwrap();

		let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM post").fetch_one(&pool).await.unwrap();
		assert_eq!(count, 0);
	}
}
