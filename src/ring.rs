//! Cross-section ring sampling.

use crate::float_types::{FULL_TURN_DEG, HALF_TURN_DEG, Real};
use nalgebra::{Point3, Rotation3, Vector2, Vector3};

/// One sample on a ring: the angle it was taken at (degrees, seam at ±180°)
/// and the resulting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPoint {
    pub angle_deg: Real,
    pub position: Point3<Real>,
}

/// Samples `num_sides + 1` evenly spaced points around a cross-section.
///
/// The first and last sample both sit on the ±180° seam and are positionally
/// coincident; keeping them as separate samples lets the caller emit distinct
/// vertex-buffer entries on either side of the UV wrap.
#[derive(Debug, Clone, Copy)]
pub struct RingSampler {
    num_sides: usize,
}

impl RingSampler {
    pub const fn new(num_sides: usize) -> Self {
        Self { num_sides }
    }

    pub const fn num_sides(&self) -> usize {
        self.num_sides
    }

    /// Angular step between adjacent samples, in degrees.
    pub fn step_deg(&self) -> Real {
        FULL_TURN_DEG / self.num_sides as Real
    }

    /// Samples a ring around `center`.
    ///
    /// * `axial_rotation_deg` — rotation of the ring plane's axis about the
    ///   world up axis; the ring is traced about
    ///   `rotate(forward, axial_rotation_deg, up)`.
    /// * `scale` — per-axis radii of the (possibly elliptical) cross-section.
    ///   The scale acts on the circular offset in the ring's up/side basis,
    ///   before any further interpretation, so a non-uniform scale yields a
    ///   true ellipse rather than a sheared circle.
    /// * `phase_deg` — extra angular offset applied to every sample; twisted
    ///   rings pass half an angular step here.
    ///
    /// Angles run from −180° to +180° inclusive in `num_sides` equal steps
    /// (plus phase). Returns `num_sides + 1` samples.
    pub fn sample(
        &self,
        center: Point3<Real>,
        axial_rotation_deg: Real,
        scale: Vector2<Real>,
        phase_deg: Real,
    ) -> Vec<RingPoint> {
        let up = Vector3::y();
        let axis = Rotation3::from_axis_angle(
            &Vector3::y_axis(),
            axial_rotation_deg.to_radians(),
        ) * Vector3::z();
        // `axis` stays perpendicular to `up`, so the ring's in-plane basis is
        // simply (up, axis × up).
        let side = axis.cross(&up);

        let step = self.step_deg();
        (0..=self.num_sides)
            .map(|i| {
                let angle_deg = -HALF_TURN_DEG + step * i as Real + phase_deg;
                let theta = angle_deg.to_radians();
                let offset = up * (scale.y * theta.cos()) + side * (scale.x * theta.sin());
                RingPoint {
                    angle_deg,
                    position: center + offset,
                }
            })
            .collect()
    }
}

/// Linear map of a ring angle from [−180°, 180°] to the [0, 1] UV range.
pub fn uv_u_for_angle(angle_deg: Real) -> Real {
    (angle_deg + HALF_TURN_DEG) / FULL_TURN_DEG
}
