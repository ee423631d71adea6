//! Page modules for the two gated screens.
//!
//! ARCHITECTURE
//! ============
//! Each page runs its load-time check once when it mounts, then delegates
//! all session and request logic to `authgate`.

pub mod home;
pub mod login;
