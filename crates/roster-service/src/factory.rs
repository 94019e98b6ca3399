//! Constructors returning boxed user services.

use crate::user_service::UserService;
use crate::{MockUserService, UserServiceImpl};
use roster_config::ServiceBackend;
use tracing::debug;

/// Creates an in-memory user service with an empty store.
#[must_use]
pub fn new_user_service() -> Box<dyn UserService> {
    Box::new(UserServiceImpl::new())
}

/// Creates the user service selected by `backend`.
#[must_use]
pub fn create_user_service(backend: ServiceBackend) -> Box<dyn UserService> {
    debug!("Creating user service with backend: {}", backend);

    match backend {
        ServiceBackend::Store => new_user_service(),
        ServiceBackend::Mock => Box::new(MockUserService::new()),
    }
}
