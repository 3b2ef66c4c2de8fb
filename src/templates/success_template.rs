use askama::Template;
use crate::models::SuccessView;

#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate<'a> {
    pub site_name: String,
    pub base_url: String,
    pub success: &'a SuccessView,
}
