//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session signal from Leptos context and never
//! write to it directly; writes go through `state::controller`.

pub mod guard;
pub mod nav_menu;
pub mod shell;
