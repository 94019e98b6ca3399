//! In-memory user service.

use crate::user_service::UserService;
use roster_core::{Entity, RosterError, RosterResult, User, UserId};
use std::collections::HashMap;
use tracing::{debug, info, warn};

const USER_RESOURCE: &str = "User";

/// User service backed by an in-memory map keyed by user ID.
#[derive(Debug, Default, Clone)]
pub struct UserServiceImpl {
    users: HashMap<UserId, User>,
}

impl UserServiceImpl {
    /// Creates a service with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service seeded with `users`.
    ///
    /// Later users overwrite earlier ones with the same ID.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (*user.id(), user))
            .collect();
        Self { users }
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns true if a user with `id` is stored.
    #[must_use]
    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    fn require_user(user: Option<User>) -> RosterResult<User> {
        user.ok_or_else(|| {
            warn!("Rejected user operation without a user");
            RosterError::invalid_argument("user cannot be empty")
        })
    }
}

impl UserService for UserServiceImpl {
    fn get_user(&self, id: UserId) -> RosterResult<User> {
        debug!("Getting user: {}", id);

        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| RosterError::not_found(USER_RESOURCE, id))
    }

    fn create_user(&mut self, user: Option<User>) -> RosterResult<()> {
        let user = Self::require_user(user)?;
        debug!("Creating user: {}", user.id);

        let id = *user.id();
        if self.users.insert(id, user).is_some() {
            info!("User replaced: {}", id);
        } else {
            info!("User created: {}", id);
        }
        Ok(())
    }

    fn update_user(&mut self, user: Option<User>) -> RosterResult<()> {
        let user = Self::require_user(user)?;
        debug!("Updating user: {}", user.id);

        let id = *user.id();
        let slot = self.users.get_mut(&id).ok_or_else(|| {
            warn!("Update rejected, user not found: {}", id);
            RosterError::not_found(USER_RESOURCE, id)
        })?;
        *slot = user;

        info!("User updated: {}", id);
        Ok(())
    }

    fn delete_user(&mut self, id: UserId) -> RosterResult<()> {
        debug!("Deleting user: {}", id);

        if self.users.remove(&id).is_none() {
            warn!("Delete rejected, user not found: {}", id);
            return Err(RosterError::not_found(USER_RESOURCE, id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}
