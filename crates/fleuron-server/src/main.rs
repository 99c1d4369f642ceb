mod pages;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use fleuron::{FleuronConfig, NamedRouter, Renderer};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match std::env::var("FLEURON_CONFIG") {
        Ok(path) => FleuronConfig::load_from(&path)?,
        Err(_) => FleuronConfig::load(),
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);

    info!(
        project = %config.project.name,
        dispatch = ?config.layout.dispatch,
        backend = ?config.layout.backend_patterns,
        "fleuron starting"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(&config)?)
        .await
        .context("Server error")?;

    Ok(())
}

/// Build the router: named frontend and backend pages plus an unnamed health check
fn app(config: &FleuronConfig) -> Result<Router> {
    let renderer = Renderer::from_config(config).context("Invalid layout configuration")?;
    let state = AppState {
        renderer: Arc::new(renderer),
    };

    let router = NamedRouter::new()
        .route("frontend.home", "/", get(pages::home))
        .route("frontend.about", "/about", get(pages::about))
        .route("backend.dashboard", "/admin", get(pages::dashboard))
        .route("backend.users.index", "/admin/users", get(pages::users))
        .route("backend.users.show", "/admin/users/:id", get(pages::user))
        .unnamed("/health", get(|| async { "ok" }))
        .into_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fleuron::response::LAYOUT_HEADER;
    use fleuron::Dispatch;
    use pretty_assertions::assert_eq;

    fn server(config: &FleuronConfig) -> TestServer {
        TestServer::new(app(config).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_home_uses_frontend_layout() {
        let response = server(&FleuronConfig::default()).get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header(LAYOUT_HEADER), "frontend");
        assert!(response.text().contains("<title>fleuron-app</title>"));
    }

    #[tokio::test]
    async fn test_admin_pages_use_backend_layout() {
        let server = server(&FleuronConfig::default());

        for path in ["/admin", "/admin/users", "/admin/users/7"] {
            let response = server.get(path).await;
            assert_eq!(response.header(LAYOUT_HEADER), "backend", "{}", path);
        }
    }

    #[tokio::test]
    async fn test_user_page_escapes_id() {
        let response = server(&FleuronConfig::default())
            .get("/admin/users/%3Cb%3E")
            .await;

        assert!(response.text().contains("User &lt;b&gt;"));
    }

    #[tokio::test]
    async fn test_dynamic_dispatch_serves_same_pages() {
        let branch = server(&FleuronConfig::default());

        let mut config = FleuronConfig::default();
        config.layout.dispatch = Dispatch::Dynamic;
        let dynamic = server(&config);

        for path in ["/", "/about", "/admin", "/admin/users"] {
            assert_eq!(
                branch.get(path).await.text(),
                dynamic.get(path).await.text(),
            );
        }
    }

    #[test]
    fn test_invalid_backend_pattern_fails_startup() {
        let mut config = FleuronConfig::default();
        config.layout.backend_patterns = vec![String::new()];

        let err = app(&config).err().unwrap();
        assert!(format!("{:#}", err).contains("pattern is empty"));
    }

    #[tokio::test]
    async fn test_health_is_plain_text() {
        let response = server(&FleuronConfig::default()).get("/health").await;
        assert_eq!(response.text(), "ok");
    }
}
