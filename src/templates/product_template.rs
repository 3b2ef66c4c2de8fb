use askama::Template;
use crate::models::ProductView;

#[derive(Template)]
#[template(path = "product.html")]
pub struct ProductTemplate<'a> {
    pub site_name: String,
    pub base_url: String,
    pub product: &'a ProductView,
}
