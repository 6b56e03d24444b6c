mod cli;

use crate::cli::{GeneratorArg, CLI};
use anyhow::Context;
use clap::Parser;
use snip_core::CodeFormat;
use snip_gateway::{App, AppState};
use snip_generator::{RandomGenerator, RandomGeneratorSettings, SeqGenerator};
use snip_shortener::ShortenerSettings;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    snip_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        generator = %config.generator,
        "starting gateway server"
    );

    let state = build_state(&config)?;
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server failed")?;

    info!("gateway stopped");
    Ok(())
}

fn build_state(config: &CLI) -> anyhow::Result<AppState> {
    let format = CodeFormat::new(config.code_length)?;
    let settings = ShortenerSettings::builder()
        .max_attempts(config.max_attempts)
        .build();

    let state = match config.generator {
        GeneratorArg::Random => {
            let generator = RandomGenerator::new(
                RandomGeneratorSettings::builder()
                    .code_length(config.code_length)
                    .build(),
            )?;
            AppState::in_memory(generator, format, settings, &config.public_base_url)
        }
        GeneratorArg::Sequential => {
            let generator =
                SeqGenerator::with_prefix(&config.generator_prefix, config.code_length)
                    .context("invalid sequential generator settings")?;
            AppState::in_memory(generator, format, settings, &config.public_base_url)
        }
    };

    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
