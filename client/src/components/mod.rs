//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Site chrome (`site_header`, `site_footer`) wraps every route; the
//! verification form and its result panel are the only stateful pieces.

pub mod site_footer;
pub mod site_header;
pub mod submit_button;
pub mod verdict_panel;
pub mod verifier_form;
