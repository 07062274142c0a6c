//! Progress output: `[TAG] message` lines on stdout.

use std::fmt;

use offsync::log::{CLEANUP, SUCCESS};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "offsync=debug";

/// Formats each event as a bracketed tag followed by its fields
pub struct StatusFormat;

impl<S, N> FormatEvent<S, N> for StatusFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "[{}] ", status_tag(event.metadata()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Tag for an event: its dedicated target if any, otherwise its level
pub fn status_tag(meta: &Metadata<'_>) -> &'static str {
    match meta.target() {
        SUCCESS => "SUCCESS",
        CLEANUP => "CLEANUP",
        _ => match *meta.level() {
            Level::ERROR => "ERROR",
            Level::WARN => "WARN",
            Level::INFO => "INFO",
            Level::DEBUG => "DEBUG",
            Level::TRACE => "TRACE",
        },
    }
}

pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(StatusFormat)
        .init();
    Ok(())
}
