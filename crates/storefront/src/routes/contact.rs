//! Contact page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::filters;
use crate::state::AppState;
use crate::whatsapp;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/show.html")]
pub struct ContactTemplate {
    pub whatsapp_link: String,
}

/// Display contact page.
pub async fn show(State(state): State<AppState>) -> ContactTemplate {
    let whatsapp_link = whatsapp::deep_link(
        &state.config().whatsapp_number,
        "Hola Nordic Home! Quiero hacer una consulta.",
    );
    ContactTemplate { whatsapp_link }
}
