//! User service implementations.

mod mock_user_service;
mod user_service_impl;

pub use mock_user_service::{MockUserService, MOCK_USER_EMAIL, MOCK_USER_NAME};
pub use user_service_impl::UserServiceImpl;
