//! # Users Module
//!
//! Account registration:
//! - Request validation
//! - Duplicate email detection
//! - Gravatar avatar, bcrypt password hash, JWT session token
//! - `UserStore` persistence seam with an SQLite implementation

pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validators;


pub use routes::users_routes;
pub use store::{SqliteUserStore, UserStore};
