//! Local web dashboard: one HTML page plus a small JSON API.
//!
//! Served by `tiny_http` on a single thread. Requests are handled one at a
//! time against the same [`AppContext`], so the store and the loaded model
//! need no locking.

pub mod api;
pub mod routes;

use std::io::Read;

use anyhow::anyhow;
use tokio::runtime::Handle;

use crate::context::AppContext;
use api::ApiResponse;
use routes::{Method, Route};

/// Bind `addr` and serve until the process is interrupted.
///
/// Blocks the calling thread; run it under `block_in_place` or on a blocking
/// thread. `rt` drives the async store calls.
pub fn serve(
    ctx: &mut AppContext,
    rt: &Handle,
    addr: &str,
    open_browser: bool,
) -> anyhow::Result<()> {
    let server =
        tiny_http::Server::http(addr).map_err(|e| anyhow!("failed to bind {addr}: {e}"))?;
    let url = server
        .server_addr()
        .to_ip()
        .map_or_else(|| format!("http://{addr}"), |ip| format!("http://{ip}"));

    tracing::info!(%url, backend = %ctx.config.model.backend, "dashboard listening");
    eprintln!("🌐 Dashboard: {url}  (Ctrl+C để dừng)");
    if open_browser {
        if let Err(error) = open::that(&url) {
            eprintln!("Không mở được trình duyệt: {error}");
            eprintln!("Mở địa chỉ trên thủ công.");
        }
    }

    for mut request in server.incoming_requests() {
        let method = Method::from(request.method());
        let route = routes::resolve(method, request.url());

        let response = match read_body(&mut request, &route) {
            Ok(body) => api::handle(ctx, rt, route, &body),
            Err(error) => {
                tracing::warn!(%error, "failed to read request body");
                api::handle(ctx, rt, Route::BadQuery(format!("unreadable body: {error}")), "")
            }
        };

        tracing::debug!(
            method = %request.method(),
            url = request.url(),
            status = response.status,
            "dashboard request"
        );
        if let Err(error) = request.respond(into_http(response)) {
            tracing::warn!(%error, "failed to send dashboard response");
        }
    }
    Ok(())
}

/// Only routes that take a JSON body read one.
fn read_body(request: &mut tiny_http::Request, route: &Route) -> std::io::Result<String> {
    let mut body = String::new();
    if matches!(route, Route::Analyze | Route::SetModel) {
        request.as_reader().read_to_string(&mut body)?;
    }
    Ok(body)
}

fn into_http(response: ApiResponse) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    // from_data sets no default Content-Type, so ours is the only one.
    let mut http =
        tiny_http::Response::from_data(response.body.into_bytes()).with_status_code(response.status);
    if let Some(header) = header("Content-Type", response.content_type) {
        http.add_header(header);
    }
    if let Some(name) = response.attachment {
        let disposition = format!("attachment; filename=\"{name}\"");
        if let Some(header) = header("Content-Disposition", &disposition) {
            http.add_header(header);
        }
    }
    if let Some(header) = header("Cache-Control", "no-store") {
        http.add_header(header);
    }
    http
}

fn header(name: &str, value: &str) -> Option<tiny_http::Header> {
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}
