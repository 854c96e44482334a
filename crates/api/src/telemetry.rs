use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str =
    "info,geofolio_api=debug,geofolio_db=debug,geofolio_inaturalist=debug,tower_http=debug";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`. Setting `LOG_FORMAT=json` switches the
/// output to one JSON object per line.
pub fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}
