//! Navigator state machines.
//!
//! DESIGN
//! ======
//! Each piece owns one concern (`sections`, `scroll_spy`, `scroller`,
//! `preference`) and `nav` composes them. None of them touch the DOM; they
//! act through an injected [`crate::adapter::DocumentAdapter`] and notify
//! listeners explicitly instead of relying on framework reactivity.

pub mod nav;
pub mod preference;
pub mod scroll_spy;
pub mod scroller;
pub mod sections;
