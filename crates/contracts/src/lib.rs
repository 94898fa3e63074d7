//! Shared types for the generated-result viewer.
//!
//! Everything here is target independent: no DOM access, no async runtime.
//! The frontend crate wires these types to the browser.

pub mod domain;
pub mod shared;
