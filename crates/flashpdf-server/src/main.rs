use tracing_subscriber::EnvFilter;

use flashpdf_export::styles::DocumentStyles;
use flashpdf_server::config::{LogFormat, ServerConfig};
use flashpdf_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let state = AppState::new(DocumentStyles::default())?;
    let app = flashpdf_server::router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        max_upload_bytes = config.max_upload_bytes,
        "flashpdf listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
