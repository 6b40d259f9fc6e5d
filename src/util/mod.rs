//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! theme) from page and component logic to improve reuse and testability.

pub mod guard;
pub mod navigation;
pub mod settings;
pub mod storage;
pub mod theme;
pub mod token_store;
