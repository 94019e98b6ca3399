//! User service trait definition.

use roster_core::{RosterResult, User, UserId};

/// User service trait.
///
/// Mutating operations take `&mut self`; implementations hold no internal
/// lock, so shared use across threads needs an outer `Mutex`.
pub trait UserService: Send {
    /// Gets a user by ID.
    fn get_user(&self, id: UserId) -> RosterResult<User>;

    /// Creates a user, replacing any existing user with the same ID.
    fn create_user(&mut self, user: Option<User>) -> RosterResult<()>;

    /// Replaces an existing user.
    fn update_user(&mut self, user: Option<User>) -> RosterResult<()>;

    /// Deletes a user by ID.
    fn delete_user(&mut self, id: UserId) -> RosterResult<()>;
}
