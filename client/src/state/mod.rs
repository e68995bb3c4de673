//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with methods, held in signals by the components that
//! own it. Keeping it free of Leptos types lets the transition rules be
//! unit tested without a reactive runtime.

pub mod dashboard;
pub mod verify;
