//! cityradius-rs
//!
//! Umbrella crate: re-exports [`cityradius_core`] so the demos under
//! `demos/` can `use cityradius_rs::prelude::*`.

pub use cityradius_core::*;
