//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::{Request, Response};
use std::time::Duration;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse,
    OnFailure, OnRequest, OnResponse, TraceLayer,
};
use tracing::{Level, Span};

use super::audit::{AuditExempt, is_exempt_request};

type MakeSpanFn = fn(&Request<Body>) -> Span;

/// Trace layer with audit-exempt requests left out.
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeSpanFn,
    SkipExemptOnRequest,
    SkipExemptOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    SkipExemptOnFailure,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with the HTTP method and the URI path.
///   The query string is left out: `returnUrl` values are user-controlled.
///
/// **On Response:**
/// - Logs at `INFO` level with status code and latency in milliseconds
///
/// The login submission gets no span and no request, response or failure
/// event, see [`super::audit`].
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/Account/Login}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_request(SkipExemptOnRequest(DefaultOnRequest::new()))
        .on_response(SkipExemptOnResponse(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        ))
        .on_failure(SkipExemptOnFailure(DefaultOnFailure::new()))
}

fn make_span(req: &Request<Body>) -> Span {
    if is_exempt_request(req.method(), req.uri().path()) {
        return Span::none();
    }
    tracing::info_span!("request", method = %req.method(), path = %req.uri().path())
}

/// [`DefaultOnRequest`] that stays silent for audit-exempt requests.
#[derive(Debug, Clone)]
pub struct SkipExemptOnRequest(DefaultOnRequest);

impl<B> OnRequest<B> for SkipExemptOnRequest {
    fn on_request(&mut self, request: &Request<B>, span: &Span) {
        if is_exempt_request(request.method(), request.uri().path()) {
            return;
        }
        self.0.on_request(request, span);
    }
}

/// [`DefaultOnResponse`] that stays silent for responses marked [`AuditExempt`].
#[derive(Debug, Clone)]
pub struct SkipExemptOnResponse(DefaultOnResponse);

impl<B> OnResponse<B> for SkipExemptOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        if response.extensions().get::<AuditExempt>().is_some() {
            return;
        }
        self.0.on_response(response, latency, span);
    }
}

/// [`DefaultOnFailure`] that stays silent for requests without a span.
#[derive(Debug, Clone)]
pub struct SkipExemptOnFailure(DefaultOnFailure);

impl<C: std::fmt::Display> OnFailure<C> for SkipExemptOnFailure {
    fn on_failure(&mut self, failure_classification: C, latency: Duration, span: &Span) {
        if span.is_none() {
            return;
        }
        self.0.on_failure(failure_classification, latency, span);
    }
}
