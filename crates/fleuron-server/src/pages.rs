// Demo pages
// Each handler builds its content and leaves the shell to the renderer

use crate::AppState;
use axum::extract::{Path, State};
use fleuron::{html, CurrentRoute, LayoutRequest, PageResponse, Result};

pub async fn home(State(state): State<AppState>, route: CurrentRoute) -> Result<PageResponse> {
    let content = html! {
        h1 { "Welcome" }
        p { "Server-rendered pages with Axum and Maud." }
    };

    state.renderer.page(&route, LayoutRequest::new(content))
}

pub async fn about(State(state): State<AppState>, route: CurrentRoute) -> Result<PageResponse> {
    let content = html! {
        h1 { "About" }
        p { "Pages under the backend namespace get the admin shell." }
    };

    state
        .renderer
        .page(&route, LayoutRequest::new(content).title("About"))
}

pub async fn dashboard(State(state): State<AppState>, route: CurrentRoute) -> Result<PageResponse> {
    let content = html! {
        h1 { "Dashboard" }
        p { "Rendered for route " code { (route.name.as_str()) } }
    };

    state
        .renderer
        .page(&route, LayoutRequest::new(content).title("Dashboard"))
}

pub async fn users(State(state): State<AppState>, route: CurrentRoute) -> Result<PageResponse> {
    let users = ["ada", "grace", "linus"];
    let content = html! {
        h1 { "Users" }
        ul {
            @for (id, name) in users.iter().enumerate() {
                li { a href=(format!("/admin/users/{}", id + 1)) { (name) } }
            }
        }
    };

    state
        .renderer
        .page(&route, LayoutRequest::new(content).title("Users"))
}

pub async fn user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    route: CurrentRoute,
) -> Result<PageResponse> {
    let content = html! {
        h1 { "User " (id) }
        a href="/admin/users" { "Back to users" }
    };

    state
        .renderer
        .page(&route, LayoutRequest::new(content).title(format!("User {}", id)))
}
