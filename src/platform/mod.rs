//! Platform abstraction layer
//!
//! Browser builds get a LocalStorage-backed store and a `WebGame` handle the
//! page script drives from `requestAnimationFrame` and its input listeners.
//! Native builds use [`crate::persistence::FileStore`] directly.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorageStore, WebGame};
