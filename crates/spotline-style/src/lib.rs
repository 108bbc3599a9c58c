#![forbid(unsafe_code)]

//! Color types and color-scale sampling for Spotline.
//!
//! This crate provides:
//! - [`Rgb`] as the single color currency of the workspace
//! - [`ColorScale`] for mapping a normalized scalar in [0, 1] to a color
//! - [`InterpolatedScale`] with a jet-like default ramp for track coloring

/// Color types and interpolation helpers.
pub mod color;
/// Color-scale sampling.
pub mod scale;

pub use color::Rgb;
pub use scale::{ColorScale, InterpolatedScale};
