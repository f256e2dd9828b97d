//! In-memory user store for `UserBox`.
//!
//! [`UserStore`] owns an insertion-ordered list of [`User`] records and
//! implements the list, search, lookup, create, edit and delete operations.
//! [`Users`] is the cloneable handle the HTTP layer shares between workers.
//!
//! # Example
//!
//! ```rust
//! use userbox_users::{UserForm, UserStore};
//!
//! let mut store = UserStore::default();
//! let jane = store.create(&UserForm::new("Jane Doe", "jane@example.com")).unwrap();
//!
//! assert_eq!(jane.id, 1);
//! assert_eq!(store.search(Some("Doe")).len(), 1);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

pub mod models;
pub mod validation;

pub use models::{User, UserForm};
pub use validation::{Field, FieldError, ValidationErrors};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User {id} not found")]
    NotFound { id: u64 },
    #[error("Invalid user: {0}")]
    Validation(ValidationErrors),
    #[error("No user ids left after {last}")]
    IdsExhausted { last: u64 },
}

#[cfg(feature = "api")]
impl From<UserError> for actix_web::Error {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound { .. } => actix_web::error::ErrorNotFound(err.to_string()),
            UserError::Validation(_) => actix_web::error::ErrorBadRequest(err.to_string()),
            UserError::IdsExhausted { .. } => {
                actix_web::error::ErrorInternalServerError(err.to_string())
            }
        }
    }
}

/// The insertion-ordered collection of users.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Creates a store seeded with `users`, keeping their ids as given.
    ///
    /// Seeding a user with id `u64::MAX` leaves no id for [`Self::create`].
    #[must_use]
    pub const fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users whose name or email contains `query`.
    ///
    /// An empty or absent query returns every user.
    #[must_use]
    pub fn search(&self, query: Option<&str>) -> Vec<User> {
        match query.filter(|x| !x.is_empty()) {
            Some(query) => {
                let users = self
                    .users
                    .iter()
                    .filter(|x| x.matches(query))
                    .cloned()
                    .collect::<Vec<_>>();
                log::trace!("search: query={query:?} matched {} user(s)", users.len());
                users
            }
            None => self.users.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|x| x.id == id)
    }

    /// The id the next created user will receive, or `None` once the highest
    /// id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<u64> {
        self.users
            .iter()
            .map(|x| x.id)
            .max()
            .map_or(Some(1), |id| id.checked_add(1))
    }

    /// # Errors
    ///
    /// * [`UserError::Validation`] if the name is empty, the email is malformed or
    ///   already used by another user
    /// * [`UserError::IdsExhausted`] if the highest id is already `u64::MAX`
    pub fn create(&mut self, form: &UserForm) -> Result<User, UserError> {
        let errors = validation::validate(form, &self.users, None);
        if !errors.is_empty() {
            log::debug!("create: rejected: {errors}");
            return Err(UserError::Validation(errors));
        }

        let Some(id) = self.next_id() else {
            log::error!("create: no ids left");
            return Err(UserError::IdsExhausted { last: u64::MAX });
        };

        let user = User {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
        };
        log::debug!("create: id={} email={}", user.id, user.email);
        self.users.push(user.clone());

        Ok(user)
    }

    /// # Errors
    ///
    /// * [`UserError::NotFound`] if no user has the id `id`
    /// * [`UserError::Validation`] if the name is empty, the email is malformed or
    ///   already used by another user
    pub fn update(&mut self, id: u64, form: &UserForm) -> Result<User, UserError> {
        if self.get(id).is_none() {
            log::debug!("update: id={id} not found");
            return Err(UserError::NotFound { id });
        }

        let errors = validation::validate(form, &self.users, Some(id));
        if !errors.is_empty() {
            log::debug!("update: id={id} rejected: {errors}");
            return Err(UserError::Validation(errors));
        }

        let user = self
            .users
            .iter_mut()
            .find(|x| x.id == id)
            .ok_or(UserError::NotFound { id })?;
        user.name.clone_from(&form.name);
        user.email.clone_from(&form.email);
        log::debug!("update: id={id} email={}", user.email);

        Ok(user.clone())
    }

    /// # Errors
    ///
    /// * [`UserError::NotFound`] if no user has the id `id`
    pub fn delete(&mut self, id: u64) -> Result<User, UserError> {
        let Some(index) = self.users.iter().position(|x| x.id == id) else {
            log::debug!("delete: id={id} not found");
            return Err(UserError::NotFound { id });
        };

        let user = self.users.remove(index);
        log::debug!("delete: id={id}");

        Ok(user)
    }
}

/// Shared handle to a [`UserStore`].
///
/// Each operation takes the lock once; nothing is held across calls.
#[derive(Debug, Clone, Default)]
pub struct Users {
    store: Arc<RwLock<UserStore>>,
}

impl Users {
    #[must_use]
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, UserStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.read().list().to_vec()
    }

    #[must_use]
    pub fn search(&self, query: Option<&str>) -> Vec<User> {
        self.read().search(query)
    }

    /// # Errors
    ///
    /// * [`UserError::NotFound`] if no user has the id `id`
    pub fn get(&self, id: u64) -> Result<User, UserError> {
        self.read().get(id).cloned().ok_or(UserError::NotFound { id })
    }

    /// # Errors
    ///
    /// * See [`UserStore::create`]
    pub fn create(&self, form: &UserForm) -> Result<User, UserError> {
        self.write().create(form)
    }

    /// # Errors
    ///
    /// * See [`UserStore::update`]
    pub fn update(&self, id: u64, form: &UserForm) -> Result<User, UserError> {
        self.write().update(id, form)
    }

    /// # Errors
    ///
    /// * See [`UserStore::delete`]
    pub fn delete(&self, id: u64) -> Result<User, UserError> {
        self.write().delete(id)
    }
}
