//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are mostly static layout. The two with behavior delegate it:
//! `home` to the verifier form component, `dashboard` to its state module.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod how_it_works;
