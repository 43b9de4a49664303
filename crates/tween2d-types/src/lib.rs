//! Foundation types for tween2d.
//!
//! This crate contains the platform-agnostic types shared by the animation
//! engine and its drivers: colors, 2D points and rotation helpers, the shape
//! backend trait, and error types.

pub mod backend;
pub mod color;
pub mod error;
pub mod geometry;
