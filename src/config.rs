use crate::services::response::ServiceError;

#[derive(Debug, Clone)]
pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	pub database_url: String,
	pub max_connections: u32,
	pub allow_origins: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: "info".into(),
			server_ip_port: "0.0.0.0:3000".into(),
			database_url: "sqlite://posts.db".into(),
			max_connections: 5,
			allow_origins: "http://localhost:3000,http://localhost:3001".into(),
		}
	}
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		let default = Config::default();

		let log_level = std::env::var("LOG_LEVEL").unwrap_or(default.log_level);
		let server_ip_port = std::env::var("SERVER_IP_PORT").unwrap_or(default.server_ip_port);
		let database_url = std::env::var("DATABASE_URL").unwrap_or(default.database_url);
		let allow_origins = std::env::var("ALLOW_ORIGINS").unwrap_or(default.allow_origins);
		let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
			Ok(value) => parse_max_connections(&value)?,
			Err(_) => default.max_connections,
		};

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			max_connections,
			allow_origins,
		})
	}

	/// Fallback `EnvFilter` directives when `RUST_LOG` is unset.
	///
	/// Covers both the library target and the `web` binary target.
	pub fn log_filter(&self) -> String {
		// axum logs rejections from built-in extractors with the `axum::rejection`
		// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
		format!(
			"post_crud={level},web={level},tower_http=debug,axum::rejection=trace",
			level = self.log_level
		)
	}

	/// Splits `allow_origins` on commas, dropping blanks.
	pub fn origins(&self) -> Vec<&str> {
		self.allow_origins.split(',').map(str::trim).filter(|origin| !origin.is_empty()).collect()
	}
}

fn parse_max_connections(value: &str) -> Result<u32, ServiceError> {
	match value.trim().parse::<u32>() {
		Ok(0) | Err(_) => Err(ServiceError::ConfigError(format!(
			"DATABASE_MAX_CONNECTIONS must be a positive integer, got `{value}`"
		))),
		Ok(n) => Ok(n),
	}
}
