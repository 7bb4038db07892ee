//! NabiYam Bridge library target.
//!
//! Exposes the front-end modules for integration tests. The binary entry
//! point is in `main.rs`.

pub mod app;
pub mod helpers;
pub mod messages;
pub mod update;
pub mod view;
