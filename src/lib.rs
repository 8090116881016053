pub mod adapters;
pub mod common;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use crate::{
	config::Config,
	dependencies::Dependency,
	routes::{cors_layer, create_routes},
	services::response::ServiceError,
};

/// Opens the store, serves until ctrl-c or SIGTERM, then closes the store.
pub async fn run(config: &Config) -> Result<(), ServiceError> {
	let dependency = Dependency::new(config).await?;
	let app = create_routes(dependency.clone()).layer(cors_layer(config)?);

	let listener = tokio::net::TcpListener::bind(config.server_ip_port.as_str()).await?;
	tracing::info!("Listening on {}", listener.local_addr()?);

	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

	dependency.close().await;
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			tracing::error!("Failed to install ctrl-c handler: {}", err);
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(err) => {
				tracing::error!("Failed to install SIGTERM handler: {}", err);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
	tracing::info!("Shutdown signal received");
}
