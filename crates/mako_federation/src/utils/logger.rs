use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls keep the first one.
pub fn init_logger() {
    let _result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mako_federation=info")),
        )
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::NONE)
        .without_time()
        .try_init();
}
