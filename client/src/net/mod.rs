//! Networking for the login exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `authgate`'s transport seam over `fetch`; request and
//! response interpretation stays in `authgate::login`.

pub mod api;
