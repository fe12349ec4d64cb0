//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → rotating JSON lines
//! ```
//!
//! Spans are written to `artscope-otlp.json` in the plugin data directory,
//! one OTLP JSON document per exported batch. The file rotates by size and
//! keeps a few timestamped backups.
//!
//! Host requests complete in a later `update` call than the one that issued
//! them, so each request carries a [`TraceContext`] and the span that handles
//! its response links back to the issuing span.
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: the span exporter and tracer provider
//! - [`otlp`]: OTLP JSON encoding of spans
//! - [`rotation`]: size-rotated append-only file
//! - [`context`]: trace context carried across host round-trips

mod context;
mod exporter;
mod init;
mod otlp;
pub mod rotation;

pub use context::TraceContext;
pub use init::{init_tracing, TRACE_FILE_NAME};
