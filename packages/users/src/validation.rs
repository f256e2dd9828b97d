//! Field-level validation of submitted [`UserForm`]s.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use strum_macros::{AsRefStr, Display};

use crate::models::{User, UserForm};

pub const NAME_REQUIRED_MESSAGE: &str = "Name cannot be null or empty.";
pub const INVALID_EMAIL_MESSAGE: &str =
    "Invalid email format. Please enter a valid email address.";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex")
});

/// The form fields errors are reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum Field {
    Name,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Errors collected while validating a form, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|x| x.field == field)
    }

    /// Messages reported for `field`.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(move |x| x.field == field)
            .map(|x| x.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[must_use]
pub fn duplicate_email_message(owner: &str) -> String {
    format!("Email already exists for user {owner}. Please enter a different email address.")
}

/// Validates `form` against the users already in the store.
///
/// The user with id `editing` is skipped by the uniqueness check so an edit
/// may keep its own email.
pub fn validate<'a>(
    form: &UserForm,
    existing: impl IntoIterator<Item = &'a User>,
    editing: Option<u64>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.name.is_empty() {
        errors.add(Field::Name, NAME_REQUIRED_MESSAGE);
    }

    if form.email.is_empty() || !is_valid_email(&form.email) {
        errors.add(Field::Email, INVALID_EMAIL_MESSAGE);
    }

    if !form.email.is_empty()
        && let Some(owner) = existing
            .into_iter()
            .find(|x| x.email == form.email && Some(x.id) != editing)
    {
        errors.add(Field::Email, duplicate_email_message(&owner.name));
    }

    errors
}
