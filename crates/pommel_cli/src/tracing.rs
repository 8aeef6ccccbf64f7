use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;

/// Defines the name of the environment variable, which holds the log filter.
pub(crate) const POMMEL_LOG_ENVKEY: &str = "POMMEL_LOG";

/// Registers a console subscriber, which writes to `stderr`.
///
/// The filter is read from [`POMMEL_LOG_ENVKEY`] and defaults to `warn`. When
/// `trace` is set, the default is raised to `debug` and span events are included.
pub(crate) fn register_console_tracer(trace: bool) {
    let format = tracing_subscriber::fmt::format()
        .compact()
        .with_file(trace)
        .with_line_number(trace)
        .with_thread_ids(false)
        .with_target(false);

    let span_events = if trace { FmtSpan::ACTIVE } else { FmtSpan::NONE };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_span_events(span_events)
        .with_writer(std::io::stderr);

    let default_level = if trace { LevelFilter::DEBUG } else { LevelFilter::WARN };

    let filter_layer = EnvFilter::try_from_env(POMMEL_LOG_ENVKEY).unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .parse_lossy("")
    });

    let tracer = tracing_subscriber::registry().with(filter_layer).with(fmt_layer);

    if let Err(err) = tracing::subscriber::set_global_default(tracer) {
        eprintln!("failed to register tracer: {err}");
    }
}
