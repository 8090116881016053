use sqlx::SqlitePool;

use crate::{
	adapters::repositories::Repository,
	config::Config,
	database::{connection_pool, init_schema, DatabaseExecutor},
	services::response::ServiceError,
};

///* `Dependency` is the struct you implement injectable dependencies that will be handed to every handler.
///* It is built once at start-up and cloned into the router state; the pool inside is reference counted.
#[derive(Clone)]
pub struct Dependency {
	pool: SqlitePool,
}

impl Dependency {
	pub async fn new(config: &Config) -> Result<Self, ServiceError> {
		let pool = connection_pool(&config.database_url, config.max_connections).await?;
		init_schema(&pool).await?;
		tracing::info!("Connected to {}", config.database_url);
		Ok(Self { pool })
	}

	pub fn repository(&self) -> Repository {
		Repository::new(DatabaseExecutor::new(self.pool.clone()))
	}

	pub async fn close(&self) {
		self.pool.close().await;
		tracing::info!("Connection pool closed");
	}

	#[cfg(test)]
	pub(crate) async fn in_memory() -> Self {
		let config = Config {
			database_url: "sqlite::memory:".into(),
			max_connections: 1,
			..Default::default()
		};
		Self::new(&config).await.unwrap()
	}
}
