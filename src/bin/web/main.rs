use post_crud::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
	let config = match Config::new() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("{}", err);
			std::process::exit(1);
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
		.with(tracing_subscriber::fmt::layer())
		.init();

	if let Err(err) = post_crud::run(&config).await {
		tracing::error!("Server stopped: {}", err);
		std::process::exit(1);
	}
}
