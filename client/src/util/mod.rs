//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so non-hydrate builds (SSR and tests) compile to harmless no-ops.

pub mod clock;
pub mod delay;
pub mod nav;
pub mod notice;
pub mod storage;
pub mod theme;
