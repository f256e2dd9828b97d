//! User records and the form submitted to create or edit them.

use serde::{Deserialize, Serialize};

/// A user held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique id, assigned on creation and never changed.
    pub id: u64,
    /// Display name, never empty.
    pub name: String,
    /// Email address, unique across the store.
    pub email: String,
}

impl User {
    /// Whether the name or email contains `query`.
    ///
    /// The comparison is case-sensitive.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.email.contains(query)
    }
}

/// The editable fields of a [`User`] as submitted by a client.
///
/// Missing fields deserialize to empty strings so they are reported as
/// validation errors instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserForm {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<&User> for UserForm {
    fn from(value: &User) -> Self {
        Self {
            name: value.name.clone(),
            email: value.email.clone(),
        }
    }
}
