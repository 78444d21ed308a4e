//! Adapters: concrete implementations of the domain ports.

pub mod actors;
pub mod memory;
