//! Endpoints served outside of the `/users` scope.

use actix_web::{HttpResponse, http::header, route};
use userbox_admin_htmx::views::users::USERS_PATH;

#[route("/health", method = "GET")]
pub async fn health_endpoint() -> HttpResponse {
    log::trace!("Healthy");
    HttpResponse::Ok().body("healthy")
}

#[route("/", method = "GET")]
pub async fn root_endpoint() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, USERS_PATH))
        .finish()
}
