//! Role-based access rules for navigation and UI gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side only: these checks decide what to render and where to
//! navigate. The server remains the authority on every request.

pub mod roles;
pub mod table;

pub use roles::Role;
pub use table::PermissionTable;
