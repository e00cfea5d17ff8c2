//! Console Logging
//!
//! A tracing layer that formats events as `[target] message` and hands
//! them to a sink. In the browser the sink is `web_sys::console`.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(sink: impl Fn(Level, &str) + Send + Sync + 'static) -> Self {
        Self { sink: Box::new(sink) }
    }

    /// Layer writing to the browser console
    pub fn browser() -> Self {
        Self::new(write_console)
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = format!("[{}] {}", event.metadata().target(), visitor.finish());
        (self.sink)(*event.metadata().level(), &line);
    }
}

/// Collects `message` first, then any other fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field, format_args!("{:?}", value));
        }
    }
}

impl MessageVisitor {
    fn push_field(&mut self, field: &Field, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::log_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    eprintln!("{:>5} {}", level, line);
}

/// Install the console layer as the global subscriber.
/// DEBUG in debug builds, INFO in release.
pub fn init() -> Result<(), LoggingError> {
    let max_level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let subscriber = tracing_subscriber::registry()
        .with(ConsoleLayer::browser().with_filter(max_level));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
