//! Value primitives shared by the effects
//!
//! - `Point` / `Offset` / `Rect` / `Size` → pixel geometry
//! - `Ease` → timing curves for smoothed motion

pub mod easing;
pub mod position;

pub use easing::Ease;
pub use position::{Offset, Point, Rect, Size};
