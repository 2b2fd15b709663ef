pub mod auth;
pub mod blog;
pub mod dashboard;
pub mod doctors;
pub mod errors;
pub mod pages;

pub use errors::{ServiceError, ServiceResult};
