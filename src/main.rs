use axum::{
    routing::{get, Router},
    Json,
};
use clap::Parser;
use covidmapsrv::{
    api::{markers, viewport},
    cli::Args,
    config::Config,
    pipeline,
    services::fetch::SnapshotService,
    AppState,
};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::OnceCell;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("covidmapsrv=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(url) = &args.snapshot_url {
        config.snapshot_url = url.clone();
    }
    let config = Arc::new(config);

    let snapshot_service =
        match SnapshotService::new(&config.snapshot_url, config.fetch_timeout_secs) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                eprintln!("Failed to initialize snapshot service: {}", e);
                std::process::exit(1);
            }
        };

    if args.once {
        let layer = pipeline::run_once(&snapshot_service).await;
        match serde_json::to_string_pretty(&layer) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize marker layer: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let app_state = AppState {
        config: config.clone(),
        snapshot_service: snapshot_service.clone(),
        marker_layer: Arc::new(OnceCell::new()),
    };

    let app = Router::new()
        .route("/markers", get(markers::get_markers))
        .route("/viewport", get(viewport::get_viewport))
        .route(
            "/health",
            get({
                (
                    StatusCode::OK,
                    Json(serde_json::json!({ "status": "healthy" })),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = TcpListener::bind(&format!("0.0.0.0:{}", config.server_port))
        .await
        .unwrap();

    println!("Server listening on http://0.0.0.0:{}", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Signal received, starting graceful shutdown");
}
