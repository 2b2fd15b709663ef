//! DTO modules that bridge services with templates.

pub mod blog;
pub mod doctors;
pub mod pages;
