use anyhow::Result;
use axum::{
    body::Body,
    extract::{FromRef, Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use sentiview_app::{shell, App};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone, FromRef)]
struct WebState {
    leptos_options: LeptosOptions,
    backend: Backend,
}

/// The review-aggregation backend this UI fronts. Every `/api/*` request from
/// the browser is handed through to it unchanged.
#[derive(Clone)]
struct Backend {
    base_url: String,
    client: reqwest::Client,
}

fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{base}/api/{path}?{query}"),
        None => format!("{base}/api/{path}"),
    }
}

async fn proxy_api(
    State(backend): State<Backend>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let url = upstream_url(&backend.base_url, &path, query.as_deref());
    // one attempt, no retry; failures become a JSON error the page renders
    let upstream = match backend.client.get(&url).send().await {
        Ok(upstream) => upstream,
        Err(e) => return upstream_error(&url, &e),
    };
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    match upstream.bytes().await {
        Ok(bytes) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(bytes))
            .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response()),
        Err(e) => upstream_error(&url, &e),
    }
}

fn upstream_error(url: &str, error: &reqwest::Error) -> Response {
    error!("backend request {url} failed: {error}");
    (
        StatusCode::BAD_GATEWAY,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::json!({"success": false, "error": "backend unavailable"}).to_string(),
    )
        .into_response()
}

pub(crate) async fn start() -> Result<()> {
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let backend = Backend {
        base_url: std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:5001".to_string()),
        client: reqwest::Client::new(),
    };
    info!("proxying /api to {}", backend.base_url);

    let routes = generate_route_list(App);
    let state = WebState {
        leptos_options: leptos_options.clone(),
        backend,
    };

    let app = Router::new()
        .route("/api/{*path}", get(proxy_api))
        .leptos_routes(&state, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<WebState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("serving at http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_urls_preserve_path_and_query() {
        assert_eq!(
            upstream_url("http://localhost:5001", "search", Some("q=wireless%20mouse")),
            "http://localhost:5001/api/search?q=wireless%20mouse"
        );
        assert_eq!(
            upstream_url("http://localhost:5001", "product/3/reviews", None),
            "http://localhost:5001/api/product/3/reviews"
        );
    }
}
