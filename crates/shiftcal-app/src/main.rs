use chrono::Utc;
use shiftcal_app::export::{export_schedule, local_today};
use shiftcal_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting shiftcal schedule export");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let today = local_today(&config)?;
    let summary = export_schedule(&config, today, Utc::now()).await?;

    for skipped in &summary.report.skipped_months {
        tracing::warn!(month = %skipped.month, reason = %skipped.reason, "Month missing from calendar");
    }

    tracing::info!(
        path = %summary.path.display(),
        events = summary.report.events.len(),
        "Done"
    );

    Ok(())
}
