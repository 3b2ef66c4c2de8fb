use askama::Template;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub site_name: String,
    pub base_url: String,
    pub status: u16,
    pub message: String,
}
