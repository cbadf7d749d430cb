mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use coupon_core::{CouponManager, CouponService, InMemoryRepository, UuidGenerator};
use coupon_gateway::{App, AppState};
use coupon_storage::{MongoRepository, ReadRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    let _telemetry = coupon_telemetry::init(config.telemetry())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting coupon gateway"
    );

    let coupons: Arc<dyn CouponManager> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(CouponService::new(
            InMemoryRepository::new(),
            UuidGenerator,
        )),
        StorageBackendArg::Mongodb => {
            let uri = config
                .mongodb_uri
                .as_deref()
                .context("mongodb uri is required when storage backend is mongodb")?;
            let repository = MongoRepository::connect(
                uri,
                config.mongodb_database.as_deref(),
                &config.mongodb_collection,
            )
            .await?;
            // The driver connects lazily; report an unreachable server early.
            if let Err(err) = repository.ping().await {
                warn!(error = %err, "mongodb did not answer the startup ping");
            }
            Arc::new(CouponService::new(repository, UuidGenerator))
        }
    };

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening for connections");

    axum::serve(listener, App::router(AppState::new(coupons)))
        .with_graceful_shutdown(exit_signal())
        .await?;

    info!("coupon gateway stopped");
    Ok(())
}

async fn exit_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => (),
        _ = terminate => (),
    }
    info!("shutdown signal received, shutting down gracefully");
}
