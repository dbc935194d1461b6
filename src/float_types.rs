//! Scalar type selection and numeric constants.
//!
//! The crate computes in a single floating-point width chosen at build time:
//! the `f64` feature (default) or the `f32` feature selects [`Real`].

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used for coincidence tests (ring seams, degenerate normals).
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used for coincidence tests (ring seams, degenerate normals).
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Half a turn, in degrees. Ring angles run from `-HALF_TURN_DEG` to
/// `+HALF_TURN_DEG` inclusive.
pub const HALF_TURN_DEG: Real = 180.0;

/// A full turn, in degrees.
pub const FULL_TURN_DEG: Real = 360.0;
