//! Procedural board-game geometry: a grid game board and a tapered, twisted
//! tubular snake mesh, regenerated wholesale from numeric parameters.
//!
//! The crate is a pure function of its configuration: [`SnakeConfig::generate`]
//! walks a parametric path, samples cross-section rings, stitches them into
//! triangle strips and hands back flat position/normal/UV/index arrays
//! ([`MeshBuffers`]) for whatever consumes renderable meshes.
//! [`BoardConfig::build`] produces the matching board placement data.
//!
//! # Features
//! - **f64** (default): compute with `f64` as [`Real`](float_types::Real)
//! - **f32**: compute with `f32` as `Real`, conflicts with `f64`
//! - **serde**: `Serialize`/`Deserialize` on the configuration types
//!
//! # Concurrency
//! None. Generation is synchronous, deterministic and proportional to
//! `num_sides * num_segments`; a mesh instance's regeneration calls must be
//! serialized by the caller.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod board;
pub mod errors;
pub mod float_types;
pub mod ring;
pub mod section;
pub mod snake;
pub mod tube;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use board::{BoardConfig, BoardLayout};
pub use errors::GenerateError;
pub use section::{MeshBuffers, MeshSection};
pub use snake::SnakeConfig;
pub use tube::{CylinderProfile, EndCapProfile, TubeGenerator, TubeProfile};
