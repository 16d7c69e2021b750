use anyhow::Context;

use codrisk_api::app::{self, services::AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    codrisk_observability::init();

    let model_path = std::env::var("CODRISK_MODEL_PATH").unwrap_or_else(|_| {
        tracing::info!(
            "CODRISK_MODEL_PATH not set; using default {}",
            app::services::DEFAULT_MODEL_PATH
        );
        app::services::DEFAULT_MODEL_PATH.to_string()
    });

    // Artifact load failure is fatal for the HTTP surface: a prediction
    // service without a model has nothing to serve.
    let services = match AppServices::load(&model_path) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(path = %model_path, error = %e, "failed to load classifier artifact");
            std::process::exit(1);
        }
    };

    let bind = std::env::var("CODRISK_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
