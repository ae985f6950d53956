//! Built-in layouts and layout transformers.
pub mod layout;
