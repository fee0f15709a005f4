//! Core traits, settings, and the module registry shared by bookshelf services.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
