use super::format::format_size;
use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// One colored line per request: time, duration, size, status, method, path.
///
/// Static files are streamed, so the size comes from `Content-Length`
/// instead of buffering the body.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .map(format_size)
        .unwrap_or_else(|| "-".to_string());

    // cyan for 2xx/3xx, yellow otherwise
    let color_code = if status < 400 { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>9} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status,
        method,
        path
    );

    if status >= 500 {
        tracing::error!(%method, %path, status, "request failed");
    }

    response
}
