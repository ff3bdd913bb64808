//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and read/write the page's
//! [`crate::app::NavContext`] from Leptos context.

pub mod nav_bar;
pub mod theme_toggle;
pub mod toc_sidebar;
