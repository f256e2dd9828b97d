use actix_web::{
    HttpResponse, Scope,
    dev::{ServiceFactory, ServiceRequest},
    http::header::{self, ContentType},
};
use maud::Markup;

use crate::views::users::USERS_PATH;

mod users;

pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    users::bind_services(scope)
}

/// Answers a successful submission with a redirect to the user list.
fn redirect_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, USERS_PATH))
        .finish()
}

fn html_response(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}
