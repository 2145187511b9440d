//! Pointer-reactive visual effects for the browser.
//!
//! Two effects are provided, each built on the same proximity-reactive core:
//!
//! | Module | Role |
//! |--------|------|
//! | [`tracker`] | Per-controller subscription to the pointer-move stream |
//! | [`follower`] | An element that trails the pointer |
//! | [`magnet`] | Elements pulled toward a nearby pointer (direct and smoothed) |
//! | [`tween`] | Frame-driven offset interpolation |
//! | [`env`] | Capability traits the controllers run against |
//! | [`web`] | `web-sys` implementations of those traits |
//! | [`bindings`] | JavaScript exports |
//!
//! Controllers are generic over [`env::Environment`], so everything except
//! [`web`] and [`bindings`] runs natively under `cargo test`.

pub mod bindings;
pub mod env;
pub mod error;
pub mod follower;
pub mod magnet;
pub mod primitives;
pub mod tracker;
pub mod tween;
pub mod web;

#[cfg(test)]
mod testing;

pub use error::{FxError, Result};
pub use follower::{Follower, FollowerOptions};
pub use magnet::{Attraction, Magnet, MagnetOptions};
