//! Core domain types and the store trait for the homescout backend.
//!
//! No HTTP, no database: everything here is plain data, validation,
//! and the [`store::SiteStore`] contract the backends implement.

// Native `async fn` in traits; the `Send` bounds are spelled out as
// `impl Future + Send` return types in the store trait instead.
#![allow(async_fn_in_trait)]

pub mod area;
pub mod catalog;
pub mod content;
pub mod error;
pub mod intent;
pub mod lead;
pub mod store;

pub use error::{Error, Result};
