//! # Roster Service
//!
//! The [`UserService`] contract and its implementations:
//!
//! ```text
//! dyn UserService
//!   ├── UserServiceImpl   (in-memory store, validates every call)
//!   └── MockUserService   (stateless, canned responses, never fails)
//! ```

pub mod factory;
pub mod user_service;
pub mod r#impl;

pub use factory::*;
pub use user_service::*;
pub use r#impl::{MockUserService, UserServiceImpl, MOCK_USER_EMAIL, MOCK_USER_NAME};
