//! Browser environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from pages and components. Outside the
//! `csr` feature they degrade to no-ops or `Unavailable` errors so native
//! tests can exercise their callers.

pub mod navigate;
pub mod storage;
