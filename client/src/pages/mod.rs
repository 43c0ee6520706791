//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The client is a single screen. The page owns startup orchestration and
//! delegates rendering details to `components`.

pub mod home;
