use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::config::SITE_NAME;
use crate::error::ShopError;
use crate::models::{AppState, ErrorBody};
use crate::templates::ErrorTemplate;

#[derive(Default)]
pub struct TemplateGlobals {
    pub site_name: String,
    pub base_url: String,
}

pub fn build_template_globals(state: &AppState) -> TemplateGlobals {
    TemplateGlobals {
        site_name: SITE_NAME.to_string(),
        base_url: state.config.public_base_url.clone(),
    }
}

pub fn render_template<T: Template>(status: StatusCode, t: T) -> Response {
    match t.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            let e = ShopError::from(e);
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Render the HTML error page for a failed page request.
/// `not_found` is shown when the requested resource does not exist.
pub fn error_page(state: &AppState, err: &ShopError, not_found: &str) -> Response {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(%err, "page request failed");
    } else {
        tracing::info!(%err, "page request rejected");
    }
    let message = if status == StatusCode::NOT_FOUND {
        not_found.to_string()
    } else {
        "Não foi possível carregar a página. Tente novamente mais tarde.".to_string()
    };
    let TemplateGlobals { site_name, base_url } = build_template_globals(state);
    render_template(
        status,
        ErrorTemplate {
            site_name,
            base_url,
            status: status.as_u16(),
            message,
        },
    )
}

pub fn json_error<S: Into<String>>(status: StatusCode, message: S) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}
