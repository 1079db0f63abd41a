//! HTTP server for the JSON API and the static site

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Information;
use crate::index::ArticleIndex;
use crate::Folio;

/// Body of every 404 from the article endpoints
pub const NOT_FOUND_BODY: &str = r#"{"message":"Not found"}"#;

/// Everything the handlers read; built before the listener is bound
#[derive(Debug)]
pub struct AppState {
    pub index: ArticleIndex,
    information_json: String,
}

impl AppState {
    pub fn new(index: ArticleIndex, information: &Information) -> Result<Self> {
        Ok(Self {
            index,
            information_json: serde_json::to_string(information)?,
        })
    }

    /// Load the content directory and index it
    pub fn load(folio: &Folio) -> Result<Self> {
        let index = folio.build_index()?;
        Self::new(index, &folio.config.information)
    }
}

/// Routes for the API, falling back to files under `static_dir`
pub fn router(state: Arc<AppState>, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/articles", get(list_articles))
        .route("/articles.json", get(list_articles))
        .route("/articles/:slug", get(get_article))
        .route("/information", get(information))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(AppState::load(folio)?);
    tracing::info!("Indexed {} articles", state.index.len());

    let app = router(state, &folio.static_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /articles
async fn list_articles(State(state): State<Arc<AppState>>) -> Response {
    json_response(StatusCode::OK, state.index.list_json().to_owned())
}

/// GET /articles/:slug
async fn get_article(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    // Static exports are named <slug>.json; accept the same URL here, but an
    // exact slug match always wins
    let found = state.index.get(&slug).or_else(|| {
        slug.strip_suffix(".json")
            .and_then(|stripped| state.index.get(stripped))
    });

    match found {
        Some(json) => json_response(StatusCode::OK, json.to_owned()),
        None => {
            tracing::debug!("Article not found: {}", slug);
            json_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_owned())
        }
    }
}

/// GET /information
async fn information(State(state): State<Arc<AppState>>) -> Response {
    json_response(StatusCode::OK, state.information_json.clone())
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{normalize_articles, ArticleSource};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use indexmap::IndexMap;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn source(slug: &str, date: &str, title: &str) -> ArticleSource {
        ArticleSource {
            title: title.to_string(),
            date: date.to_string(),
            slug: slug.to_string(),
            excerpt: format!("{} excerpt", title),
            html: format!("<p>{}</p>", title),
            extra: IndexMap::new(),
        }
    }

    fn app(static_dir: &FsPath) -> Router {
        let articles = normalize_articles(
            vec![
                source("a", "2021-01-01", "First"),
                source("b", "2022-06-15", "Second"),
            ],
            "MMMM D, YYYY",
        )
        .unwrap();
        let index = ArticleIndex::build(&articles).unwrap();
        let information = Information {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let state = AppState::new(index, &information).unwrap();
        router(Arc::new(state), static_dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_list_articles() {
        let tmp = TempDir::new().unwrap();
        let (status, content_type, body) = get(app(tmp.path()), "/articles").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let list: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(list[0]["slug"], "b");
        assert_eq!(list[1]["slug"], "a");
        assert_eq!(list[0]["printDate"], "June 15, 2022");
        assert!(list[0].get("html").is_none());
    }

    #[tokio::test]
    async fn test_list_articles_idempotent() {
        let tmp = TempDir::new().unwrap();
        let app = app(tmp.path());
        let (_, _, first) = get(app.clone(), "/articles").await;
        let (_, _, second) = get(app.clone(), "/articles").await;
        let (_, _, alias) = get(app, "/articles.json").await;
        assert_eq!(first, second);
        assert_eq!(first, alias);
    }

    #[tokio::test]
    async fn test_get_article() {
        let tmp = TempDir::new().unwrap();
        let (status, content_type, body) = get(app(tmp.path()), "/articles/a").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let article: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(article["slug"], "a");
        assert_eq!(article["title"], "First");
        assert_eq!(article["date"], "2021-01-01");
        assert_eq!(article["excerpt"], "First excerpt");
        assert_eq!(article["html"], "<p>First</p>");
        assert_eq!(article["printDate"], "January 1, 2021");
    }

    #[tokio::test]
    async fn test_get_article_json_suffix() {
        let tmp = TempDir::new().unwrap();
        let app = app(tmp.path());
        let (_, _, plain) = get(app.clone(), "/articles/b").await;
        let (status, _, suffixed) = get(app, "/articles/b.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plain, suffixed);
    }

    #[tokio::test]
    async fn test_get_article_slug_ending_in_json() {
        let tmp = TempDir::new().unwrap();
        let articles = normalize_articles(
            vec![
                source("data", "2021-01-01", "Data"),
                source("data.json", "2022-01-01", "Data file"),
            ],
            "YYYY",
        )
        .unwrap();
        let state = AppState::new(ArticleIndex::build(&articles).unwrap(), &Information::default())
            .unwrap();
        let app = router(Arc::new(state), tmp.path());

        let (status, _, body) = get(app.clone(), "/articles/data.json").await;
        assert_eq!(status, StatusCode::OK);
        let article: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(article["title"], "Data file");

        let (status, _, body) = get(app, "/articles/data.json.json").await;
        assert_eq!(status, StatusCode::OK);
        let article: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(article["title"], "Data file");
    }

    #[tokio::test]
    async fn test_get_article_not_found() {
        let tmp = TempDir::new().unwrap();
        let (status, content_type, body) = get(app(tmp.path()), "/articles/c").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"message":"Not found"}"#);
    }

    #[tokio::test]
    async fn test_information() {
        let tmp = TempDir::new().unwrap();
        let (status, _, body) = get(app(tmp.path()), "/information").await;
        assert_eq!(status, StatusCode::OK);
        let info: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(info["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("robots.txt"), "User-agent: *").unwrap();

        let (status, _, body) = get(app(tmp.path()), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "User-agent: *");

        let (status, _, _) = get(app(tmp.path()), "/missing.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_body_is_json() {
        let expected = serde_json::json!({ "message": "Not found" }).to_string();
        assert_eq!(NOT_FOUND_BODY, expected);
    }
}
