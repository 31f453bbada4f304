use axum::Router;
use axum::middleware;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::infrastructure::settings::Settings;
use crate::presentation::http::middleware::method_override::method_override;
use crate::presentation::http::middleware::trace::apply_trace;
use crate::presentation::{AppState, http_handlers};

pub(crate) async fn run_http(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_app(settings, state);

    let addr = settings.http_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server listening on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

/// Static files take precedence over page routes, and the method override
/// runs before either sees the request.
pub(crate) fn build_app(settings: &Settings, state: AppState) -> Router {
    let pages = http_handlers::routes(state);
    let site = ServeDir::new(&settings.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(pages);
    let site = middleware::from_fn_with_state(
        settings.http_request_body_limit_bytes,
        method_override,
    )
    .layer(site);

    let app = Router::new().fallback_service(site);
    apply_trace(app).layer(RequestBodyLimitLayer::new(
        settings.http_request_body_limit_bytes,
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl-C");
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
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown signal received, draining connections");
}
