use maud::{Markup, html};
use userbox_users::{Field, User, UserForm, ValidationErrors};

use super::page;

pub const USERS_PATH: &str = "/users";
pub const SEARCH_PATH: &str = "/users/search";
pub const CREATE_PATH: &str = "/users/create";

#[must_use]
pub fn details_path(id: u64) -> String {
    format!("{USERS_PATH}/details/{id}")
}

#[must_use]
pub fn edit_path(id: u64) -> String {
    format!("{USERS_PATH}/edit/{id}")
}

#[must_use]
pub fn delete_path(id: u64) -> String {
    format!("{USERS_PATH}/delete/{id}")
}

fn search_form(filter: Option<&str>) -> Markup {
    html! {
        form action=(SEARCH_PATH) method="get" {
            input
                type="text"
                name="query"
                placeholder="Search by name or email..."
                value=(filter.unwrap_or_default());
            button type="submit" { "Search" }
            @if filter.is_some_and(|x| !x.is_empty()) {
                " "
                a href=(USERS_PATH) { "Back to full list" }
            }
        }
    }
}

fn user_row(user: &User) -> Markup {
    html! {
        tr {
            td { (user.id) }
            td { (user.name) }
            td { (user.email) }
            td.actions {
                a href=(details_path(user.id)) { "Details" }
                a href=(edit_path(user.id)) { "Edit" }
                a href=(delete_path(user.id)) { "Delete" }
            }
        }
    }
}

/// The user list, optionally narrowed by `filter`.
pub fn index(users: &[User], filter: Option<&str>) -> Markup {
    page(
        "Users",
        &html! {
            (search_form(filter))
            p { a href=(CREATE_PATH) { "Create New" } }
            @if users.is_empty() {
                p.empty { "No users found." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Id" }
                            th { "Name" }
                            th { "Email" }
                            th {}
                        }
                    }
                    tbody {
                        @for user in users {
                            (user_row(user))
                        }
                    }
                }
            }
        },
    )
}

fn user_fields(user: &User) -> Markup {
    html! {
        dl {
            dt { "Id" }
            dd { (user.id) }
            dt { "Name" }
            dd { (user.name) }
            dt { "Email" }
            dd { (user.email) }
        }
    }
}

pub fn details(user: &User) -> Markup {
    page(
        "Details",
        &html! {
            (user_fields(user))
            p.actions {
                a href=(edit_path(user.id)) { "Edit" }
                a href=(USERS_PATH) { "Back to List" }
            }
        },
    )
}

fn field_errors(errors: &ValidationErrors, field: Field) -> Markup {
    html! {
        @for message in errors.for_field(field) {
            span.field-error data-field=(field.as_ref()) { (message) }
        }
    }
}

fn user_form(action: &str, form: &UserForm, errors: &ValidationErrors, submit: &str) -> Markup {
    html! {
        form action=(action) method="post" {
            div.field {
                label for="name" { "Name" }
                " "
                input id="name" type="text" name="name" value=(form.name);
                (field_errors(errors, Field::Name))
            }
            div.field {
                label for="email" { "Email" }
                " "
                input id="email" type="email" name="email" value=(form.email);
                (field_errors(errors, Field::Email))
            }
            button type="submit" { (submit) }
        }
        p { a href=(USERS_PATH) { "Back to List" } }
    }
}

/// The create form, redisplaying `form` and its `errors` after a rejected submission.
pub fn create(form: &UserForm, errors: &ValidationErrors) -> Markup {
    page("Create", &user_form(CREATE_PATH, form, errors, "Create"))
}

/// The edit form for user `id`.
pub fn edit(id: u64, form: &UserForm, errors: &ValidationErrors) -> Markup {
    page("Edit", &user_form(&edit_path(id), form, errors, "Save"))
}

pub fn delete(user: &User) -> Markup {
    page(
        "Delete",
        &html! {
            p { "Are you sure you want to delete this user?" }
            (user_fields(user))
            form action=(delete_path(user.id)) method="post" {
                button type="submit" { "Delete" }
                " "
                a href=(USERS_PATH) { "Back to List" }
            }
        },
    )
}
