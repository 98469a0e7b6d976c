//! **wayfind-core** — foundational types for the wayfind search engines.
//!
//! This crate provides the types shared across the *wayfind* workspace: the
//! [`Point`] geometry primitive and the immutable occupancy [`Grid`] that the
//! search engines query through its walkability contract.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Cell, Grid, GridError};
