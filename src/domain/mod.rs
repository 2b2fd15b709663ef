//! Domain records shared by the portal services and templates.

pub mod auth;
pub mod content;
pub mod doctor;
pub mod types;
