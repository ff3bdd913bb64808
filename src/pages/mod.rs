//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its section list and mounts the navigator for its own page
//! view; rendering details live in `components`.

pub mod docs;
pub mod home;
