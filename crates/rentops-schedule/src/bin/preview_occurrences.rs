use std::path::PathBuf;

use anyhow::Context;
use rentops_core::config::load_config;
use rentops_schedule::{Event, OccurrenceEngine};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: preview_occurrences <event.json>");
        std::process::exit(2);
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let event: Event = serde_json::from_str(&raw)
        .with_context(|| format!("parsing event from {}", path.display()))?;

    let engine = OccurrenceEngine::from_settings(&config);

    match engine.generate_with_summary(&event) {
        Ok((occurrences, summary)) => {
            println!("{}", serde_json::to_string_pretty(&occurrences)?);
            println!("{summary}");
            Ok(())
        }
        Err(err) => {
            for message in err.messages() {
                eprintln!("- {message}");
            }
            std::process::exit(1);
        }
    }
}
