//! Request routing for the dashboard, independent of the HTTP server.

/// Default record window for `GET /api/timeline`.
pub const DEFAULT_TIMELINE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
    Other,
}

impl From<&tiny_http::Method> for Method {
    fn from(method: &tiny_http::Method) -> Self {
        match method {
            tiny_http::Method::Get => Self::Get,
            tiny_http::Method::Post => Self::Post,
            tiny_http::Method::Delete => Self::Delete,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Analyze,
    /// `limit` is `None` when the query leaves it to `store.history_limit`.
    History { limit: Option<u32>, offset: u32 },
    ClearHistory,
    Stats,
    Timeline { limit: u32 },
    ExportCsv,
    ExportJson,
    GetModel,
    SetModel,
    Favicon,
    MethodNotAllowed,
    NotFound,
    BadQuery(String),
}

/// Resolve a method and raw request URL (path plus query) to a [`Route`].
#[must_use]
pub fn resolve(method: Method, url: &str) -> Route {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = path.trim_end_matches('/');

    match (path, method) {
        ("" | "/index.html", Method::Get) => Route::Index,
        ("/favicon.ico", Method::Get) => Route::Favicon,
        ("/api/analyze", Method::Post) => Route::Analyze,
        ("/api/history", Method::Get) => {
            let limit = query_opt_u32(query, "limit");
            let offset = query_opt_u32(query, "offset").map(Option::unwrap_or_default);
            match (limit, offset) {
                (Ok(limit), Ok(offset)) => Route::History { limit, offset },
                (Err(e), _) | (_, Err(e)) => Route::BadQuery(e),
            }
        }
        ("/api/history", Method::Delete) => Route::ClearHistory,
        ("/api/stats", Method::Get) => Route::Stats,
        ("/api/timeline", Method::Get) => match query_opt_u32(query, "limit") {
            Ok(limit) => Route::Timeline {
                limit: limit.unwrap_or(DEFAULT_TIMELINE_LIMIT),
            },
            Err(e) => Route::BadQuery(e),
        },
        ("/api/export/history.csv", Method::Get) => Route::ExportCsv,
        ("/api/export/history.json", Method::Get) => Route::ExportJson,
        ("/api/model", Method::Get) => Route::GetModel,
        ("/api/model", Method::Post) => Route::SetModel,
        (
            "" | "/index.html" | "/api/analyze" | "/api/history" | "/api/stats" | "/api/timeline"
            | "/api/export/history.csv" | "/api/export/history.json" | "/api/model",
            _,
        ) => Route::MethodNotAllowed,
        _ => Route::NotFound,
    }
}

/// Read an optional `u32` query parameter.
fn query_opt_u32(query: &str, key: &str) -> Result<Option<u32>, String> {
    query_param(query, key)
        .map(|raw| {
            raw.parse().map_err(|_| {
                format!("query parameter '{key}' must be a non-negative integer, got '{raw}'")
            })
        })
        .transpose()
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| urlencoding::decode(v).ok())
        .map(std::borrow::Cow::into_owned)
        .filter(|v| !v.is_empty())
}
