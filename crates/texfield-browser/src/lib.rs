//! Browser DOM layer for texfield.
//!
//! Binds the core widgets to real page elements. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `field`: `DomField`, the `FieldSurface` over an input/output pair
//! - `mount`: page scanning, one widget instance per matching element
//! - `error`: DOM-side failures
//!
//! # Re-exports
//!
//! This crate re-exports `texfield-core` for convenience, so consumers
//! only need to depend on `texfield-browser`.

// Re-export core crate
pub use texfield_core;
pub use texfield_core::*;

pub mod error;
pub mod field;
pub mod mount;

pub use error::BrowserError;
pub use field::DomField;
pub use mount::{
    MountedField, MountedPreview, MountedWidget, document, mount_live_fields,
    mount_preview_fields, mount_widgets, on_content_loaded,
};
