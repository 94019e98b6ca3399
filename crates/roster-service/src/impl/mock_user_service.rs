//! Stateless user service returning canned responses.

use crate::user_service::UserService;
use roster_core::{RosterResult, User, UserId};
use tracing::trace;

/// Name given to every user returned by [`MockUserService::get_user`].
pub const MOCK_USER_NAME: &str = "Mock User";

/// Email given to every user returned by [`MockUserService::get_user`].
pub const MOCK_USER_EMAIL: &str = "mock@example.com";

/// Permissive stand-in for call sites under test.
///
/// Every operation succeeds. Nothing is stored or validated, so this is not a
/// behavioral twin of [`UserServiceImpl`](crate::UserServiceImpl).
#[derive(Debug, Default, Clone, Copy)]
pub struct MockUserService;

impl MockUserService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UserService for MockUserService {
    fn get_user(&self, id: UserId) -> RosterResult<User> {
        trace!("Mock get_user: {}", id);
        Ok(User::new(id, MOCK_USER_NAME, MOCK_USER_EMAIL))
    }

    fn create_user(&mut self, _user: Option<User>) -> RosterResult<()> {
        trace!("Mock create_user");
        Ok(())
    }

    fn update_user(&mut self, _user: Option<User>) -> RosterResult<()> {
        trace!("Mock update_user");
        Ok(())
    }

    fn delete_user(&mut self, id: UserId) -> RosterResult<()> {
        trace!("Mock delete_user: {}", id);
        Ok(())
    }
}
