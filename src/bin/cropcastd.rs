//! cropcastd — Cropcast daemon.
//!
//! Loads the fitted artifacts once at startup and serves the inference
//! pipeline over HTTP.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use cropcast::server::config::Config;
use cropcast::server::{AppState, router};
use cropcast::{MinMaxScaler, Pipeline, SoftmaxClassifier, StandardScaler};

/// Cropcast daemon serving the recommendation pipeline.
#[derive(Parser)]
#[command(name = "cropcastd")]
#[command(version = cropcast::PKG_VERSION)]
#[command(about = "Cropcast recommendation daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration and the fitted artifacts; any failure here is
    // fatal, an unusable pipeline must not start serving.
    let config = Config::load(args.config.as_deref())?;
    let pipeline = build_pipeline(&config)?;

    info!(
        version = cropcast::PKG_VERSION,
        address = %config.server.address,
        classifier = pipeline.classifier().name(),
        classes = pipeline.classifier().labels().len(),
        "cropcastd starting"
    );

    let state = Arc::new(AppState { pipeline });
    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Build a [`Pipeline`] from configuration.
fn build_pipeline(config: &Config) -> cropcast::Result<Pipeline> {
    let builder = Pipeline::builder()
        .minmax(MinMaxScaler::from_file(&config.artifacts.minmax_scaler)?)
        .standard(StandardScaler::from_file(&config.artifacts.standard_scaler)?);

    #[cfg(feature = "onnx")]
    let builder = match (&config.artifacts.onnx_model, &config.artifacts.onnx_labels) {
        (Some(model), Some(labels)) => {
            builder.onnx(cropcast::OnnxClassifier::from_files(model, labels)?)
        }
        (None, None) => {
            builder.softmax(SoftmaxClassifier::from_file(&config.artifacts.classifier)?)
        }
        _ => {
            return Err(cropcast::CropcastError::Configuration(
                "onnx_model and onnx_labels must be configured together".to_string(),
            ));
        }
    };

    #[cfg(not(feature = "onnx"))]
    let builder = {
        if config.artifacts.onnx_model.is_some() {
            tracing::warn!("built without the onnx feature, ignoring onnx artifact settings");
        }
        builder.softmax(SoftmaxClassifier::from_file(&config.artifacts.classifier)?)
    };

    let builder = match &config.cache {
        Some(settings) => builder.cache(settings.to_cache_config()),
        None => builder,
    };

    builder.build()
}
