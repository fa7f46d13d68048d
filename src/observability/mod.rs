//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **File-Based Export**: `~/.local/share/zellij/clapper/clapper-otlp.json`
//! - **Automatic Rotation**: 10 MiB per file, 3 backups
//! - **OTLP Format**: one OTLP JSON document per exported batch
//!
//! The filter comes from the `trace_level` plugin option (an `EnvFilter`
//! directive) and defaults to `info`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file span exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-based rotating writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
