use askama::Template;
use crate::models::ProductView;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub site_name: String,
    pub base_url: String,
    pub products: &'a [ProductView],
}
