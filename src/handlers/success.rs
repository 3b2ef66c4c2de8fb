use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use std::collections::HashMap;

use crate::models::{AppState, SuccessView};
use crate::templates::SuccessTemplate;

use super::helpers::{build_template_globals, error_page, render_template, TemplateGlobals};

pub async fn success_get(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let session_id = q.get("session_id").map(|s| s.trim()).unwrap_or_default();
    if session_id.is_empty() {
        return Redirect::to("/").into_response();
    }
    let session = match state.stripe.retrieve_checkout_session(session_id).await {
        Ok(s) => s,
        Err(e) => return error_page(&state, &e, "Compra não encontrada."),
    };
    let success = SuccessView::from_session(&session);
    let TemplateGlobals { site_name, base_url } = build_template_globals(&state);
    render_template(
        StatusCode::OK,
        SuccessTemplate {
            site_name,
            base_url,
            success: &success,
        },
    )
}
