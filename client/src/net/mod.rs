//! Network layer for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poem store is plain HTTP with form bodies and JSON envelopes; `api`
//! adapts it to the core `PoemStore` trait.

pub mod api;
