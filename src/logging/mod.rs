use crate::cli::Args;
use crate::logging::consts::{QUICKWIT_BATCH_SIZE, QUICKWIT_FLUSH_INTERVAL, TASK_MARKER_FIELD};
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

/// `RUST_LOG` takes precedence over `--log-level` when set.
pub fn init(args: &Args) {
    let quickwit_logging_layer = args.quickwit_url.clone().map(|quickwit_url| {
        QuickwitLoggingLayerBuilder::new(quickwit_url)
            .marker_field(TASK_MARKER_FIELD)
            .map_marker_to_index("http_request", "http_requests")
            .map_marker_to_index("location_saved", "saved_locations")
            .map_marker_to_index("storage_availability", "storage_availability")
            .with_batch_size(QUICKWIT_BATCH_SIZE)
            .with_flush_interval(QUICKWIT_FLUSH_INTERVAL)
            .build()
    });
    let env_filter = EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
    if args.quickwit_url.is_none() {
        tracing::info!("No `--quickwit-url` given. Logs are written to stdout only.");
    }
}
