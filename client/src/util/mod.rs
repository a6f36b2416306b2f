//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! styling, clocks) from page and component logic to improve reuse and
//! testability.

pub mod document;
pub mod pre_paint;
pub mod storage;
pub mod timestamp;
