//! Networking modules for the verification gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the multipart verification request and the reporting-view
//! fetch. The wire schema itself lives in the shared `wire` crate.

pub mod api;
