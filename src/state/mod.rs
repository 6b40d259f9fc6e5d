//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the pure state machine, `profile` the derived user view, and
//! `controller` sequences the async calls that drive the machine.

pub mod controller;
pub mod profile;
pub mod session;
