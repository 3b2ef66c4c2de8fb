use crate::error::ShopError;
use crate::models::{ProductView, StripeList, StripeProduct};

use super::client::{Method, StripeClient};

const PAGE_SIZE: u32 = 100;

impl StripeClient {
    /// Retrieve a single product with its default price expanded.
    pub async fn retrieve_product(&self, product_id: &str) -> Result<StripeProduct, ShopError> {
        if product_id.trim().is_empty() {
            return Err(ShopError::NotFound("empty product id".into()));
        }
        let endpoint = format!("/v1/products/{}", urlencoding::encode(product_id));
        let params = vec![("expand[]".into(), "default_price".into())];
        self.call(Method::Get, &endpoint, &params).await
    }

    /// List every active product with its default price expanded, following
    /// `has_more` pagination.
    pub async fn list_products(&self) -> Result<Vec<StripeProduct>, ShopError> {
        let mut out = Vec::new();
        let mut starting_after: Option<String> = None;
        loop {
            let mut params = vec![
                ("active".into(), "true".into()),
                ("limit".into(), PAGE_SIZE.to_string()),
                ("expand[]".into(), "data.default_price".into()),
            ];
            if let Some(cursor) = &starting_after {
                params.push(("starting_after".into(), cursor.clone()));
            }
            let page: StripeList<StripeProduct> = self.call(Method::Get, "/v1/products", &params).await?;
            let has_more = page.has_more;
            starting_after = page.data.last().map(|p| p.id.clone());
            out.extend(page.data);
            if !has_more || starting_after.is_none() {
                break;
            }
        }
        Ok(out)
    }
}

/// Fetch and shape the product page view model.
pub async fn load_product(client: &StripeClient, product_id: &str) -> Result<ProductView, ShopError> {
    let product = client.retrieve_product(product_id).await?;
    ProductView::from_stripe(&product)
}

/// Fetch the catalog for the home page. Products without a buyable default price are skipped.
pub async fn load_products(client: &StripeClient) -> Result<Vec<ProductView>, ShopError> {
    let products = client.list_products().await?;
    let mut out = Vec::with_capacity(products.len());
    for product in &products {
        match ProductView::from_stripe(product) {
            Ok(view) => out.push(view),
            Err(e) => tracing::warn!(product_id = %product.id, %e, "skipping product"),
        }
    }
    Ok(out)
}
