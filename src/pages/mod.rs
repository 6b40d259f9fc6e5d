//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped form state and call into `state::controller` or
//! `net::api`. Access control lives in the guard wrappers `app` places
//! around them, never in the pages.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod section;
pub mod verify_user;
