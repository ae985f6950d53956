//! Extensions on top of the pure state and layout core.
pub mod layout;
