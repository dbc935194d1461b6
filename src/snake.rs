//! Snake assembly: a tapered tail cap joined to a cylindrical body.

use crate::errors::GenerateError;
use crate::float_types::Real;
use crate::section::MeshBuffers;
use crate::tube::{CylinderProfile, EndCapProfile, TubeGenerator};
use nalgebra::Point3;

/// All numeric parameters of one snake mesh.
///
/// The configuration surface (inspector, file, whatever hosts the crate) is
/// expected to keep the values in range — side count ≥ 3 for a visible tube,
/// lengths and radii ≥ 0, exponents > 0. The generator does not re-validate,
/// but boundary values never panic; `num_sides == 0` is the explicit
/// "disabled" sentinel and yields [`GenerateError::EmptyCrossSection`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnakeConfig {
    /// Where the tail tip sits; the snake extends along +Z from here.
    pub start: Point3<Real>,
    /// Cross-section side count. `0` disables the mesh.
    pub num_sides: usize,
    /// Ring count along the body.
    pub body_segments: usize,
    /// Ring count along the tail taper.
    pub tail_segments: usize,
    pub body_length: Real,
    pub tail_length: Real,
    pub body_radius: Real,
    /// Tail cross-section width falloff exponent.
    pub tail_width_power: Real,
    /// Tail cross-section height falloff exponent.
    pub tail_height_power: Real,
    /// Ring-spacing easing along the tail; > 1 packs rings toward the tip.
    pub tail_radials_bias: Real,
    /// Alternate ring twist to vary the triangulation diagonal per segment.
    pub alternate_twist: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            start: Point3::origin(),
            num_sides: 24,
            body_segments: 16,
            tail_segments: 10,
            body_length: 0.8,
            tail_length: 0.2,
            body_radius: 0.5,
            tail_width_power: 1.0,
            tail_height_power: 1.0,
            tail_radials_bias: 2.0,
            alternate_twist: true,
        }
    }
}

impl SnakeConfig {
    /// Regenerates the snake mesh from scratch.
    ///
    /// Pure and deterministic: the same configuration always produces the
    /// same buffers, so the host can call this on every parameter change and
    /// replace the previous mesh wholesale.
    pub fn generate(&self) -> Result<MeshBuffers, GenerateError> {
        if self.num_sides == 0 {
            return Err(GenerateError::EmptyCrossSection);
        }

        let tail_profile = EndCapProfile {
            width_power: self.tail_width_power,
            height_power: self.tail_height_power,
            radials_bias: self.tail_radials_bias,
        };
        let mut tail_generator = TubeGenerator::new(
            self.start,
            self.tail_length,
            self.num_sides,
            self.tail_segments,
            self.body_radius,
            tail_profile,
        );
        if self.alternate_twist {
            tail_generator = tail_generator.with_twist(false);
        }

        let mut body_generator = TubeGenerator::new(
            tail_generator.end_point(),
            self.body_length,
            self.num_sides,
            self.body_segments,
            self.body_radius,
            CylinderProfile,
        );
        if self.alternate_twist {
            // Start the body on the same twist phase the tail ended on, so
            // the alternation stays in step across the joint.
            body_generator = body_generator.with_twist(self.tail_segments % 2 == 1);
        }

        let tail = tail_generator.create_section();
        let body = body_generator.create_section();
        Ok(tail.append(body).into_buffers())
    }
}
