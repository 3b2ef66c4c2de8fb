use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::load_products;
use crate::models::AppState;
use crate::services::product_view;
use crate::templates::{HomeTemplate, ProductTemplate};

use super::helpers::{build_template_globals, error_page, render_template, TemplateGlobals};

pub async fn home_get(State(state): State<AppState>) -> impl IntoResponse {
    let products = match load_products(&state.stripe).await {
        Ok(list) => list,
        Err(e) => return error_page(&state, &e, "Catálogo indisponível."),
    };
    let TemplateGlobals { site_name, base_url } = build_template_globals(&state);
    render_template(
        StatusCode::OK,
        HomeTemplate {
            site_name,
            base_url,
            products: &products,
        },
    )
}

pub async fn product_get(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    let product = match product_view(&state, &product_id).await {
        Ok(view) => view,
        Err(e) => return error_page(&state, &e, "Produto não encontrado."),
    };
    let TemplateGlobals { site_name, base_url } = build_template_globals(&state);
    render_template(
        StatusCode::OK,
        ProductTemplate {
            site_name,
            base_url,
            product: &product,
        },
    )
}
