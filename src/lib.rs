//! Bookshelf application library
//!
//! The books CRUD module, the version module, and the wiring that runs each
//! as its own service.

pub mod modules;
pub mod service;

pub use modules::{books, version};
pub use service::{run, Service};
