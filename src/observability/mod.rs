//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! The plugin runs inside Zellij's WASI sandbox with no network, so spans are
//! serialized as OTLP JSON lines into the plugin's data directory instead of
//! being shipped to a collector:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → emotion-quiz-otlp.json
//! ```
//!
//! The file rotates at 10 MB and keeps three numbered backups.
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option (any `EnvFilter`
//! directive, e.g. `"debug"` or `"emotion_quiz=trace"`) and defaults to
//! `"info"`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use emotion_quiz::observability::init_tracing;
//! use emotion_quiz::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, SERVICE_NAME, TRACE_FILE_NAME};
