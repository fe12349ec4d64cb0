//! Trace context carried through host request contexts.

/// Trace and span IDs of the span that issued a request, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the current span's context. `None` when tracing is not
    /// initialized or the span is not sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Adds a link from `span` to the span this context was captured from.
    ///
    /// Malformed IDs are ignored.
    pub fn link_to(&self, span: &tracing::Span) {
        use opentelemetry::trace::{SpanContext, SpanId, TraceFlags, TraceId, TraceState};
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let (Ok(trace_id), Ok(span_id)) = (
            TraceId::from_hex(&self.trace_id),
            SpanId::from_hex(&self.parent_span_id),
        ) else {
            tracing::debug!(trace_id = %self.trace_id, "ignoring malformed trace context");
            return;
        };

        span.add_link(SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_without_subscriber() {
        assert_eq!(TraceContext::from_current(), None);
    }

    #[test]
    fn malformed_context_is_ignored() {
        let context = TraceContext {
            trace_id: "not-hex".to_string(),
            parent_span_id: "zz".to_string(),
        };
        context.link_to(&tracing::Span::none());
    }
}
