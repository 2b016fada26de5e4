//! JSON API behind the dashboard page.
//!
//! Handlers are plain functions over the session context so they can be
//! exercised without binding a socket. Async store calls are driven through
//! the runtime handle the server loop was started from.

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use vsa_core::export;
use vsa_core::responses::{ClearResponse, ModelResponse};
use vsa_model::{BackendKind, ModelError};

use super::routes::Route;
use crate::commands::analyze::classify_and_save;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::page::history_page;
use crate::context::{AppContext, load_analyzer};

const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

const JSON: &str = "application/json; charset=utf-8";

/// A response ready to be handed to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Download file name, sent as `Content-Disposition: attachment`.
    pub attachment: Option<&'static str>,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, value: &T) -> Result<Self, Failure> {
        let body = serde_json::to_string(value).map_err(internal)?;
        Ok(Self {
            status,
            content_type: JSON,
            body,
            attachment: None,
        })
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: JSON,
            body: serde_json::json!({ "error": message }).to_string(),
            attachment: None,
        }
    }

    const fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: String::new(),
            attachment: None,
        }
    }
}

#[derive(Debug)]
enum Failure {
    BadRequest(String),
    Internal(anyhow::Error),
}

fn internal(error: impl Into<anyhow::Error>) -> Failure {
    Failure::Internal(error.into())
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ModelRequest {
    backend: String,
}

/// Serve one routed request. Never fails: errors become `{error}` bodies.
pub fn handle(ctx: &mut AppContext, rt: &Handle, route: Route, body: &str) -> ApiResponse {
    match dispatch(ctx, rt, route, body) {
        Ok(response) => response,
        Err(Failure::BadRequest(message)) => ApiResponse::error(400, &message),
        Err(Failure::Internal(error)) => {
            tracing::error!(error = %format!("{error:#}"), "dashboard request failed");
            ApiResponse::error(500, &format!("{error:#}"))
        }
    }
}

fn dispatch(
    ctx: &mut AppContext,
    rt: &Handle,
    route: Route,
    body: &str,
) -> Result<ApiResponse, Failure> {
    match route {
        Route::Index => Ok(ApiResponse {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: DASHBOARD_HTML.to_string(),
            attachment: None,
        }),
        Route::Favicon => Ok(ApiResponse::empty(204)),
        Route::Analyze => {
            let request: AnalyzeRequest = parse_body(body, r#"{"text": "..."}"#)?;
            let response = rt
                .block_on(classify_and_save(ctx, &request.text))
                .map_err(internal)?;
            ApiResponse::json(200, &response)
        }
        Route::History { limit, offset } => {
            let limit = effective_limit(limit, ctx.config.store.history_limit);
            let page = rt
                .block_on(history_page(&ctx.store, limit, offset))
                .map_err(internal)?;
            ApiResponse::json(200, &page)
        }
        Route::ClearHistory => {
            let deleted = rt.block_on(ctx.store.clear()).map_err(internal)?;
            ApiResponse::json(200, &ClearResponse { deleted })
        }
        Route::Stats => {
            let stats = rt.block_on(ctx.store.statistics()).map_err(internal)?;
            ApiResponse::json(200, &stats)
        }
        Route::Timeline { limit } => {
            let buckets = rt.block_on(ctx.store.timeline(limit)).map_err(internal)?;
            ApiResponse::json(200, &buckets)
        }
        Route::ExportCsv => {
            let records = rt
                .block_on(ctx.store.history(u32::MAX, 0))
                .map_err(internal)?;
            Ok(ApiResponse {
                status: 200,
                content_type: "text/csv; charset=utf-8",
                body: export::to_csv(&records),
                attachment: Some("sentiment_history.csv"),
            })
        }
        Route::ExportJson => {
            let records = rt
                .block_on(ctx.store.history(u32::MAX, 0))
                .map_err(internal)?;
            Ok(ApiResponse {
                status: 200,
                content_type: JSON,
                body: export::to_json(&records).map_err(internal)?,
                attachment: Some("sentiment_history.json"),
            })
        }
        Route::GetModel => ApiResponse::json(200, &model_response(ctx)),
        Route::SetModel => {
            let request: ModelRequest = parse_body(body, r#"{"backend": "..."}"#)?;
            switch_model(ctx, &request.backend)?;
            ApiResponse::json(200, &model_response(ctx))
        }
        Route::MethodNotAllowed => Ok(ApiResponse::error(405, "method not allowed")),
        Route::NotFound => Ok(ApiResponse::error(404, "not found")),
        Route::BadQuery(message) => Err(Failure::BadRequest(message)),
    }
}

fn parse_body<T: for<'de> Deserialize<'de>>(body: &str, shape: &str) -> Result<T, Failure> {
    serde_json::from_str(body)
        .map_err(|e| Failure::BadRequest(format!("request body must be JSON {shape}: {e}")))
}

fn model_response(ctx: &AppContext) -> ModelResponse {
    ModelResponse {
        backend: ctx.config.model.backend.clone(),
        available: BackendKind::identifiers(),
    }
}

/// Load `requested` (with the configured fallback) and swap it in.
///
/// Blocking: runs on the server thread, so requests queue while weights load.
fn switch_model(ctx: &mut AppContext, requested: &str) -> Result<(), Failure> {
    let kind: BackendKind = requested
        .parse()
        .map_err(|e: ModelError| Failure::BadRequest(e.to_string()))?;

    if ctx
        .loaded_analyzer()
        .is_some_and(|analyzer| analyzer.backend_name() == kind.as_str())
    {
        return Ok(());
    }

    let mut model = ctx.config.model.clone();
    kind.as_str().clone_into(&mut model.backend);
    let analyzer = load_analyzer(&model).map_err(internal)?;
    tracing::info!(
        requested = kind.as_str(),
        loaded = analyzer.backend_name(),
        "switched sentiment model"
    );
    ctx.set_analyzer(analyzer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tokio::runtime::Runtime;
    use vsa_config::VsaConfig;

    use crate::test_support::helpers::{test_config, test_context};

    struct Harness {
        rt: Runtime,
        ctx: AppContext,
        _dir: TempDir,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(|_| {})
        }

        fn with_config(adjust: impl FnOnce(&mut VsaConfig)) -> Self {
            let dir = TempDir::new().unwrap();
            let rt = Runtime::new().unwrap();
            let mut config = test_config(dir.path());
            adjust(&mut config);
            let ctx = rt.block_on(test_context(config));
            Self { rt, ctx, _dir: dir }
        }

        fn call(&mut self, route: Route, body: &str) -> ApiResponse {
            handle(&mut self.ctx, self.rt.handle(), route, body)
        }

        fn json(&mut self, route: Route, body: &str) -> serde_json::Value {
            let response = self.call(route, body);
            assert_eq!(response.content_type, JSON);
            serde_json::from_str(&response.body).unwrap()
        }
    }

    #[test]
    fn index_serves_the_page() {
        let mut h = Harness::new();
        let response = h.call(Route::Index, "");
        assert_eq!(response.status, 200);
        assert!(response.content_type.starts_with("text/html"));
        assert!(response.body.contains("/api/analyze"));
    }

    #[test]
    fn analyze_saves_valid_sentences() {
        let mut h = Harness::new();
        let body = r#"{"text": "Hôm nay tôi rất vui và hạnh phúc!"}"#;
        let response = h.call(Route::Analyze, body);
        assert_eq!(response.status, 200);

        let value: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(value["result"]["sentiment"], "POSITIVE");
        assert_eq!(value["saved"]["text"], "Hôm nay tôi rất vui và hạnh phúc!");

        let stats = h.json(Route::Stats, "");
        assert_eq!(stats["total"], 1);
        assert_eq!(stats["positive"], 1);
    }

    #[test]
    fn analyze_reports_invalid_input_without_saving() {
        let mut h = Harness::new();
        let value = h.json(Route::Analyze, r#"{"text": "abc"}"#);
        assert_eq!(value["result"]["error"], "Câu không hợp lệ, thử lại!");
        assert!(value["saved"].is_null());
        assert_eq!(h.json(Route::Stats, "")["total"], 0);
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let mut h = Harness::new();
        let response = h.call(Route::Analyze, "not json");
        assert_eq!(response.status, 400);
        assert!(response.body.contains("error"));
    }

    #[test]
    fn history_pages_and_clear() {
        let mut h = Harness::new();
        for text in ["Phim này hay lắm", "Món ăn này dở quá", "Hôm nay trời đẹp"] {
            let body = serde_json::json!({ "text": text }).to_string();
            assert_eq!(h.call(Route::Analyze, &body).status, 200);
        }

        let page = h.json(Route::History { limit: Some(2), offset: 0 }, "");
        assert_eq!(page["total"], 3);
        assert_eq!(page["records"].as_array().unwrap().len(), 2);
        assert_eq!(page["records"][0]["text"], "Hôm nay trời đẹp");

        let cleared = h.json(Route::ClearHistory, "");
        assert_eq!(cleared["deleted"], 3);
        assert_eq!(h.json(Route::History { limit: None, offset: 0 }, "")["total"], 0);
    }

    #[test]
    fn history_page_size_defaults_to_configured_limit() {
        let mut h = Harness::with_config(|config| config.store.history_limit = 2);
        for i in 0..3 {
            let body = serde_json::json!({ "text": format!("Hôm nay tôi rất vui lần {i}") });
            assert_eq!(h.call(Route::Analyze, &body.to_string()).status, 200);
        }

        let page = h.json(Route::History { limit: None, offset: 0 }, "");
        assert_eq!(page["limit"], 2);
        assert_eq!(page["records"].as_array().unwrap().len(), 2);
        assert_eq!(page["total"], 3);

        let explicit = h.json(Route::History { limit: Some(3), offset: 0 }, "");
        assert_eq!(explicit["records"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn timeline_groups_saved_records() {
        let mut h = Harness::new();
        h.call(Route::Analyze, r#"{"text": "Phim này hay lắm"}"#);
        h.call(Route::Analyze, r#"{"text": "Hôm nay tôi rất vui"}"#);
        let buckets = h.json(Route::Timeline { limit: 100 }, "");
        let counts: i64 = buckets
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["count"].as_i64().unwrap())
            .sum();
        assert_eq!(counts, 2);
    }

    #[test]
    fn exports_are_attachments() {
        let mut h = Harness::new();
        h.call(Route::Analyze, r#"{"text": "Phim này hay lắm"}"#);

        let csv = h.call(Route::ExportCsv, "");
        assert_eq!(csv.attachment, Some("sentiment_history.csv"));
        assert!(csv.body.contains("Phim này hay lắm,POSITIVE"));

        let json = h.call(Route::ExportJson, "");
        assert_eq!(json.attachment, Some("sentiment_history.json"));
        let parsed: serde_json::Value = serde_json::from_str(&json.body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"text": "Phim này hay lắm", "sentiment": "POSITIVE"}])
        );
    }

    #[test]
    fn model_lists_available_backends() {
        let mut h = Harness::new();
        let value = h.json(Route::GetModel, "");
        assert_eq!(value["backend"], "modernbert-base");
        assert_eq!(
            value["available"],
            serde_json::json!(["modernbert-base", "modernbert-large"])
        );
    }

    #[test]
    fn selecting_the_loaded_model_is_a_no_op() {
        let mut h = Harness::new();
        let value = h.json(Route::SetModel, r#"{"backend": "modernbert-base"}"#);
        assert_eq!(value["backend"], "modernbert-base");
    }

    #[test]
    fn unknown_model_is_bad_request() {
        let mut h = Harness::new();
        let response = h.call(Route::SetModel, r#"{"backend": "phobert"}"#);
        assert_eq!(response.status, 400);
        assert_eq!(h.json(Route::GetModel, "")["backend"], "modernbert-base");
    }

    #[test]
    fn routing_errors_map_to_status_codes() {
        let mut h = Harness::new();
        assert_eq!(h.call(Route::NotFound, "").status, 404);
        assert_eq!(h.call(Route::MethodNotAllowed, "").status, 405);
        assert_eq!(h.call(Route::BadQuery("limit".into()), "").status, 400);
        assert_eq!(h.call(Route::Favicon, "").status, 204);
    }
}
