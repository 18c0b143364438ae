use anyhow::Context;
use axum_api_key::{
    cli_args::CliArgs,
    config::ApiConfig,
    inspect::{inspect, InspectError},
    state::ApiState,
};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "inspect=trace,axum_api_key=trace");
    }

    init_tracing()?;

    let args = CliArgs::parse();

    let config = match args.config_file {
        Some(path) => ApiConfig::from_config_file(path)
            .await
            .context("Failed to load config")?,
        None => ApiConfig::default(),
    };

    let state = ApiState::from_config(&config);

    match inspect(&state, args.authorization.as_deref()).await {
        Ok(used_api_key) => {
            println!("{}", used_api_key.value);

            Ok(())
        }
        Err(InspectError::Rejected { status, body }) => {
            println!("{status}");

            if !body.is_empty() {
                println!("{}", String::from_utf8_lossy(&body));
            }

            anyhow::bail!("Request would be rejected with {status}")
        }
        Err(err) => Err(err.into()),
    }
}
