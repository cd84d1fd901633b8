use std::{net::SocketAddr, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::{sync::oneshot, task::JoinError};
use tonic::transport::{server::Router, Server};
use tracing::{error, info, warn};

use crate::{
    adapters::{
        controllers::media_controller::MediaController,
        grpc_service::{MediaGrpcService, METHOD_NAMES},
        interceptors::{
            ErrorHandlingInterceptor, InterceptorChain, LoggingInterceptor, MethodMetrics,
            MetricsInterceptor,
        },
        reflection,
    },
    application::{error::MediaError, services::MediaStorage},
    domain::config::settings::Settings,
    proto::media_service_server::MediaServiceServer,
    services::{ImageKitConfig, ImageKitStorage},
};

const HTTP2_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(30);
const HTTP2_KEEPALIVE_TIMEOUT: Duration = Duration::from_secs(5);
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to initialize storage client: {0}")]
    Storage(#[from] MediaError),

    #[error("Failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),

    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] JoinError),
}

/// Logging outermost, then error handling, then metrics when enabled.
pub fn build_chain(settings: &Settings) -> InterceptorChain {
    let chain = InterceptorChain::new()
        .with(LoggingInterceptor)
        .with(ErrorHandlingInterceptor);

    if settings.metrics_enabled() {
        let metrics = Arc::new(MethodMetrics::with_methods(METHOD_NAMES));
        chain.with(MetricsInterceptor::new(metrics))
    } else {
        chain
    }
}

pub fn build_service(
    settings: &Settings,
    storage: Arc<dyn MediaStorage>,
) -> MediaServiceServer<MediaGrpcService> {
    let controller = MediaController::new(storage, settings.ik_public_key.clone());
    let chain = build_chain(settings);
    info!(interceptors = ?chain.names(), "Interceptor chain assembled");

    MediaServiceServer::new(MediaGrpcService::new(controller, chain))
        .max_decoding_message_size(settings.max_message_size_bytes())
        .max_encoding_message_size(settings.max_message_size_bytes())
}

/// The media service behind the transport settings, plus reflection in
/// development.
pub fn router(settings: &Settings, storage: Arc<dyn MediaStorage>) -> Result<Router, ServerError> {
    let reflection = if settings.reflection_enabled() {
        let service = tonic_reflection::server::Builder::configure()
            .register_file_descriptor_set(reflection::file_descriptor_set())
            .build_v1()?;
        info!("gRPC reflection enabled");
        Some(service)
    } else {
        None
    };

    Ok(Server::builder()
        .http2_keepalive_interval(Some(HTTP2_KEEPALIVE_INTERVAL))
        .http2_keepalive_timeout(Some(HTTP2_KEEPALIVE_TIMEOUT))
        .tcp_keepalive(Some(TCP_KEEPALIVE))
        .concurrency_limit_per_connection(settings.max_workers)
        .add_service(build_service(settings, storage))
        .add_optional_service(reflection))
}

/// Runs the gRPC server until SIGINT/SIGTERM, then drains in-flight calls for
/// at most the configured grace period.
pub async fn serve(settings: Settings) -> Result<(), ServerError> {
    let listen_addr = settings.listen_addr();
    let addr: SocketAddr = listen_addr
        .parse()
        .map_err(|source| ServerError::Address {
            addr: listen_addr.clone(),
            source,
        })?;

    let storage = ImageKitStorage::new(ImageKitConfig::from_settings(&settings))?;
    let router = router(&settings, Arc::new(storage))?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = router.serve_with_shutdown(addr, async {
        shutdown_rx.await.ok();
    });

    let mut handle = tokio::spawn(server);
    info!(address = %addr, "gRPC server listening");

    tokio::select! {
        finished = &mut handle => {
            // The server stopped without being asked, e.g. the port was taken.
            finished??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    info!("Shutting down gRPC server...");
    shutdown_tx.send(()).ok();

    let grace = settings.shutdown_grace();
    match tokio::time::timeout(grace, &mut handle).await {
        Ok(finished) => finished??,
        Err(_) => {
            warn!(
                grace_secs = grace.as_secs(),
                "Grace period elapsed with calls still in flight"
            );
            handle.abort();
        }
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = sigint.recv() => info!("Received SIGINT"),
                }
                return;
            }
            _ => warn!("Failed to register signal handlers, falling back to Ctrl+C"),
        }
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C"),
        Err(e) => {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
