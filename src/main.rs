mod adapters;
mod application;
mod domain;
mod proto;
mod server;
mod services;

use domain::config::settings::{LogFormat, Settings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(settings: &Settings) {
    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_lowercase()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Console => subscriber.init(),
    }
}

fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&settings);

    info!(
        app_name = %settings.app_name,
        environment = %settings.environment,
        url_endpoint = %settings.ik_url_endpoint,
        address = %settings.listen_addr(),
        max_workers = settings.max_workers,
        metrics_enabled = settings.metrics_enabled(),
        "Starting media service"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.max_workers)
        .thread_name("media-worker")
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");

    if let Err(e) = runtime.block_on(server::serve(settings)) {
        error!(error = %e, "Server terminated with error");
        std::process::exit(1);
    }
}
