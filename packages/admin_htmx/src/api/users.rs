use actix_web::{
    HttpResponse, Scope,
    dev::{ServiceFactory, ServiceRequest},
    route, web,
};
use maud::Markup;
use serde::Deserialize;
use userbox_users::{UserError, UserForm, Users, ValidationErrors};

use super::{html_response, redirect_to_index};
use crate::views;

pub fn bind_services<
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
>(
    scope: Scope<T>,
) -> Scope<T> {
    scope.service(
        Scope::new("users")
            .service(index_endpoint)
            .service(search_endpoint)
            .service(details_endpoint)
            .service(create_form_endpoint)
            .service(create_endpoint)
            .service(edit_form_endpoint)
            .service(edit_endpoint)
            .service(delete_form_endpoint)
            .service(delete_endpoint),
    )
}

#[route("", method = "GET")]
pub async fn index_endpoint(users: web::Data<Users>) -> Markup {
    views::users::index(&users.list(), None)
}

/// Search filter, read from `query` or the older `searchString` key.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    query: Option<String>,
    search_string: Option<String>,
}

impl SearchQuery {
    /// `query` wins when both keys are given.
    fn filter(&self) -> Option<&str> {
        self.query.as_deref().or(self.search_string.as_deref())
    }
}

#[route("search", method = "GET")]
pub async fn search_endpoint(query: web::Query<SearchQuery>, users: web::Data<Users>) -> Markup {
    let filter = query.filter();

    views::users::index(&users.search(filter), filter)
}

#[route("details/{id}", method = "GET")]
pub async fn details_endpoint(
    id: web::Path<u64>,
    users: web::Data<Users>,
) -> Result<Markup, actix_web::Error> {
    let user = users.get(id.into_inner())?;

    Ok(views::users::details(&user))
}

#[route("create", method = "GET")]
pub async fn create_form_endpoint() -> Markup {
    views::users::create(&UserForm::default(), &ValidationErrors::default())
}

#[route("create", method = "POST")]
pub async fn create_endpoint(
    form: web::Form<UserForm>,
    users: web::Data<Users>,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();

    match users.create(&form) {
        Ok(user) => {
            log::info!("Created user id={}", user.id);
            Ok(redirect_to_index())
        }
        Err(UserError::Validation(errors)) => {
            Ok(html_response(views::users::create(&form, &errors)))
        }
        Err(e) => Err(e.into()),
    }
}

#[route("edit/{id}", method = "GET")]
pub async fn edit_form_endpoint(
    id: web::Path<u64>,
    users: web::Data<Users>,
) -> Result<Markup, actix_web::Error> {
    let user = users.get(id.into_inner())?;

    Ok(views::users::edit(
        user.id,
        &UserForm::from(&user),
        &ValidationErrors::default(),
    ))
}

#[route("edit/{id}", method = "POST")]
pub async fn edit_endpoint(
    id: web::Path<u64>,
    form: web::Form<UserForm>,
    users: web::Data<Users>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = id.into_inner();
    let form = form.into_inner();

    match users.update(id, &form) {
        Ok(user) => {
            log::info!("Updated user id={}", user.id);
            Ok(redirect_to_index())
        }
        Err(UserError::Validation(errors)) => {
            Ok(html_response(views::users::edit(id, &form, &errors)))
        }
        Err(e) => Err(e.into()),
    }
}

#[route("delete/{id}", method = "GET")]
pub async fn delete_form_endpoint(
    id: web::Path<u64>,
    users: web::Data<Users>,
) -> Result<Markup, actix_web::Error> {
    let user = users.get(id.into_inner())?;

    Ok(views::users::delete(&user))
}

#[route("delete/{id}", method = "POST")]
pub async fn delete_endpoint(
    id: web::Path<u64>,
    users: web::Data<Users>,
) -> Result<HttpResponse, actix_web::Error> {
    let user = users.delete(id.into_inner())?;
    log::info!("Deleted user id={}", user.id);

    Ok(redirect_to_index())
}
