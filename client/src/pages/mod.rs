//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod contact;
pub mod home;
pub mod menu;
pub mod payment;
pub mod service;
