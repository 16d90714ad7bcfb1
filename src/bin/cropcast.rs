//! cropcast — CLI client for cropcastd.
//!
//! Control and test interface for the daemon.

use clap::{Parser, Subcommand};

/// Cropcast CLI client
#[derive(Parser)]
#[command(name = "cropcast")]
#[command(version = cropcast::PKG_VERSION)]
#[command(about = "Cropcast recommendation client")]
struct Args {
    /// Server address
    #[arg(
        short,
        long,
        env = "CROPCASTD_ADDRESS",
        default_value = "http://127.0.0.1:5000"
    )]
    address: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check service health
    Health,

    /// Request a risk-ranked recommendation for one measurement set
    Predict {
        /// Nitrogen content
        #[arg(long)]
        n: f64,
        /// Phosphorus content
        #[arg(long)]
        p: f64,
        /// Potassium content
        #[arg(long)]
        k: f64,
        /// Temperature in °C
        #[arg(long)]
        temperature: f64,
        /// Relative humidity in %
        #[arg(long)]
        humidity: f64,
        /// Soil pH
        #[arg(long)]
        ph: f64,
        /// Rainfall in mm
        #[arg(long)]
        rainfall: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = reqwest::Client::new();

    match args.command {
        Command::Health => {
            let response = client
                .get(format!("{}/health", args.address))
                .send()
                .await?;
            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Command::Predict {
            n,
            p,
            k,
            temperature,
            humidity,
            ph,
            rainfall,
        } => {
            let payload = serde_json::json!({
                "N": n, "P": p, "K": k,
                "temperature": temperature,
                "humidity": humidity,
                "ph": ph,
                "rainfall": rainfall,
            });

            let response = client
                .post(format!("{}/predict", args.address))
                .json(&payload)
                .send()
                .await?;
            let status = response.status();
            let body: serde_json::Value = response.json().await?;

            if let Some(error) = body.get("error").and_then(|e| e.as_str()) {
                eprintln!("prediction failed ({status}): {error}");
                std::process::exit(1);
            }

            for tier in ["Low Risk", "Medium Risk", "High Risk"] {
                if let Some(entry) = body.get(tier).and_then(|v| v.as_str()) {
                    println!("{tier}: {entry}");
                }
            }
        }
    }

    Ok(())
}
