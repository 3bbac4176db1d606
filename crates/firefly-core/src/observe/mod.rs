//! Bridge from `tracing` to the host's log surface.
//!
//! The host only offers two plain-text channels, so events are flattened to
//! one line each: the message, then `key=value` for every other field.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::host::Misc;

/// A [`Layer`] writing every event it sees to the host log.
///
/// WARN and ERROR go to `log_error`, everything else to `log_debug`. Level
/// filtering is left to the subscriber stack.
#[derive(Debug, Clone)]
pub struct HostLogLayer<H> {
    host: H,
    with_target: bool,
}

impl<H: Misc> HostLogLayer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            with_target: false,
        }
    }

    /// Prefix each line with the event target.
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn format(&self, event: &Event<'_>) -> String {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let mut line = String::new();
        if self.with_target {
            line.push_str(event.metadata().target());
            line.push_str(": ");
        }
        line.push_str(&visitor.message);
        if !visitor.fields.is_empty() {
            if !visitor.message.is_empty() {
                line.push(' ');
            }
            line.push_str(&visitor.fields);
        }
        line
    }
}

impl<S, H> Layer<S> for HostLogLayer<H>
where
    S: Subscriber,
    H: Misc + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = self.format(event);
        if *event.metadata().level() <= Level::WARN {
            self.host.log_error(&line);
        } else {
            self.host.log_debug(&line);
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}
