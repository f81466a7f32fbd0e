// Pal Quest Schema - Shared type definitions
// This crate contains the element types and creature template definitions that
// are shared between the main pal-quest crate and its build script, so the
// catalog can be compiled to postcard at build time and decoded at runtime.

pub use creature_data::*;
pub use element_types::*;

pub mod creature_data;
pub mod element_types;
