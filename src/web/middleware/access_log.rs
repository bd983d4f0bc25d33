//! Access log middleware.

use axum::{
    extract::{ConnectInfo, Request},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

use super::audit::AuditExempt;

/// Writes one combined-log-style line per request.
///
/// Responses carrying [`AuditExempt`] are not logged at all. The client
/// address is read from [`ConnectInfo`] when the server provides it.
///
/// # Example Logs
///
/// ```text
/// INFO 10.0.0.7 - - "GET /Account/Login HTTP/1.1" 200 - "-" "Mozilla/5.0" 3ms
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());

    let ua = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    if response.extensions().get::<AuditExempt>().is_some() {
        return response;
    }

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    tracing::info!(
        r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#,
        ip = ip,
        method = method,
        path = path,
        version = version,
        status = status,
        referer = referer,
        ua = ua,
        ms = ms,
    );

    response
}
