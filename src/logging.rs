use std::fs::OpenOptions;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::AppConfig;

pub fn init(config: &AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let timer = tracing_subscriber::fmt::time::OffsetTime::local_rfc_3339()
        .expect("local time offset must be available");

    let mut env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    let directives = [
        "serenity=warn",
        "tokio_tungstenite=warn",
        "h2=warn",
        "reqwest=info",
        "adventcord=trace",
    ];

    for directive in directives {
        if let Ok(parsed) = directive.parse::<Directive>() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    let stdout_layer = default_layer()
        .with_writer(std::io::stdout)
        .with_timer(timer.clone());

    let text_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log.path)?;
    let text_file_layer = default_layer()
        .pretty()
        .with_writer(Arc::new(text_file))
        .with_timer(timer.clone())
        .with_ansi(false);

    let json_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log.json_path)?;
    let json_file_layer = default_layer()
        .json()
        .with_writer(Arc::new(json_file))
        .with_timer(timer)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(stdout_layer)
        .with(text_file_layer)
        .with(json_file_layer)
        .try_init()?;

    Ok(())
}

fn default_layer<S>() -> tracing_subscriber::fmt::Layer<S>
where
    S: Subscriber,
{
    tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
}
