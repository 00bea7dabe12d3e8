//! Route handlers. Every failure renders the error page with status 200.

use crate::error::AppError;
use crate::render::TableView;
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::error;

/// Fixed viewer query: every item with a name above the '0' sentinel, newest name first.
pub fn domain_items_query(domain: &str) -> String {
    format!(
        "select * from {} where ItemName() > '0' order by ItemName() desc",
        domain
    )
}

pub async fn redirect_root() -> Redirect {
    Redirect::temporary("/domain")
}

pub async fn list_domains(State(state): State<AppState>) -> Response {
    match state.client.list_domains().await {
        Ok(domains) => page(&state, state.templates.render_domain_list(&domains)),
        Err(e) => error_page(&state, &e.to_string()),
    }
}

const EMPTY_DOMAIN_NAME: &str = "Domain name can not be empty";

pub async fn missing_domain_name(State(state): State<AppState>) -> Response {
    error_page(&state, EMPTY_DOMAIN_NAME)
}

pub async fn show_domain(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    if name.trim().is_empty() {
        return error_page(&state, EMPTY_DOMAIN_NAME);
    }

    match state.client.select(&domain_items_query(&name)).await {
        Ok(result) => {
            let view = TableView::new(&result.items);
            page(&state, state.templates.render_items(&name, &view))
        }
        Err(e) => error_page(&state, &e.to_string()),
    }
}

fn page(state: &AppState, rendered: Result<String, AppError>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("failed to render page: {}", e);
            error_page(state, &e.to_string())
        }
    }
}

fn error_page(state: &AppState, message: &str) -> Response {
    match state.templates.render_error(message) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("failed to render error page: {}", e);
            (StatusCode::OK, message.to_string()).into_response()
        }
    }
}
