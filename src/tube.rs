//! Ring-stitched tube generation.
//!
//! A [`TubeGenerator`] walks a parametric path from `t = 0` to `t = 1` across
//! a fixed number of segments, samples a cross-section ring at each step and
//! stitches consecutive rings into a two-triangles-per-edge strip. Everything
//! shape-specific — taper, axial rotation, path easing, whether the tube
//! starts from a collapsed point — lives behind the [`TubeProfile`] strategy.

use crate::float_types::{EPSILON, Real};
use crate::ring::{RingSampler, uv_u_for_angle};
use crate::section::MeshSection;
use nalgebra::{Point2, Point3, Vector2, Vector3};

/// UV axial coordinate of a collapsed tip ring. Kept slightly above zero so
/// the seam does not degenerate at the exact tip.
const TIP_UV_V: Real = 1e-4;

/// Raise `t` to `power`, treating a non-positive exponent as identity.
fn ease(t: Real, power: Real) -> Real {
    if power > 0.0 { t.powf(power) } else { t }
}

/// Power-curve radial falloff: `t^(1/power)`, with a non-positive shaping
/// exponent degenerating to identity instead of dividing by zero.
fn taper(t: Real, power: Real) -> Real {
    if power > 0.0 { t.powf(1.0 / power) } else { t }
}

/// Shape policy for one tube: cross-section scale, axial rotation and path
/// easing as functions of the normalized path position `t ∈ [0, 1]`.
pub trait TubeProfile {
    /// Per-axis multiplier applied to the base radius at `t`.
    fn scale_at(&self, _t: Real) -> Vector2<Real> {
        Vector2::new(1.0, 1.0)
    }

    /// Axial rotation of the ring plane at `t`, in degrees.
    fn rotation_at(&self, _t: Real) -> Real {
        0.0
    }

    /// Eases the mapping from `t` to the distance fraction along the path.
    fn path_position_at(&self, t: Real) -> Real {
        t
    }

    /// Whether the start ring collapses to a single zero-radius point
    /// (a tapered tip) instead of a full ring.
    fn caps_start(&self) -> bool {
        false
    }
}

/// A straight tube of constant radius: every default of [`TubeProfile`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CylinderProfile;

impl TubeProfile for CylinderProfile {}

/// Tapered end-cap: grows from a collapsed point at `t = 0` to the full
/// cross-section at `t = 1`, with independent width/height shaping and a
/// bias easing how ring spacing concentrates toward the tip.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndCapProfile {
    /// Radial falloff exponent for the cross-section width (`x`).
    pub width_power: Real,
    /// Radial falloff exponent for the cross-section height (`y`).
    pub height_power: Real,
    /// Exponent easing path position; > 1 packs rings toward the tip.
    pub radials_bias: Real,
}

impl Default for EndCapProfile {
    fn default() -> Self {
        Self {
            width_power: 1.0,
            height_power: 1.0,
            radials_bias: 1.0,
        }
    }
}

impl TubeProfile for EndCapProfile {
    fn scale_at(&self, t: Real) -> Vector2<Real> {
        Vector2::new(taper(t, self.width_power), taper(t, self.height_power))
    }

    fn path_position_at(&self, t: Real) -> Real {
        ease(t, self.radials_bias)
    }

    fn caps_start(&self) -> bool {
        true
    }
}

/// Generates one tube as a [`MeshSection`].
///
/// Configuration is immutable per instance; the generator owns no state
/// between calls and every [`create_section`](Self::create_section) pass
/// produces a fresh section.
#[derive(Debug, Clone)]
pub struct TubeGenerator<P: TubeProfile> {
    start: Point3<Real>,
    length: Real,
    num_sides: usize,
    num_segments: usize,
    radius: Real,
    alternate_twist: bool,
    twist_parity: bool,
    profile: P,
}

impl<P: TubeProfile> TubeGenerator<P> {
    pub fn new(
        start: Point3<Real>,
        length: Real,
        num_sides: usize,
        num_segments: usize,
        radius: Real,
        profile: P,
    ) -> Self {
        Self {
            start,
            length,
            num_sides,
            num_segments,
            radius,
            alternate_twist: false,
            twist_parity: false,
            profile,
        }
    }

    /// Enables alternating half-step ring twist. `parity` flips which rings
    /// get the offset, so a tube continuing another tube can keep the
    /// alternation in step across the joint.
    pub fn with_twist(mut self, parity: bool) -> Self {
        self.alternate_twist = true;
        self.twist_parity = parity;
        self
    }

    /// Point the path ends at (`t = 1`).
    pub fn end_point(&self) -> Point3<Real> {
        self.start + Vector3::z() * self.length
    }

    fn ring_phase_deg(&self, ring_index: usize, sampler: &RingSampler) -> Real {
        let twisted = self.alternate_twist && ((ring_index % 2 == 1) ^ self.twist_parity);
        if twisted { sampler.step_deg() / 2.0 } else { 0.0 }
    }

    fn center_at(&self, t: Real) -> Point3<Real> {
        self.start + Vector3::z() * (self.profile.path_position_at(t) * self.length)
    }

    /// Builds the tube geometry.
    ///
    /// A zero-sided cross-section (the configuration surface's "disabled"
    /// sentinel) yields an empty section — no vertices, no triangles — never
    /// degenerate geometry. With `num_segments == 0` only the start ring is
    /// emitted and the section carries no triangles.
    pub fn create_section(&self) -> MeshSection {
        if self.num_sides == 0 {
            return MeshSection::new();
        }

        let sampler = RingSampler::new(self.num_sides);
        let mut section = MeshSection::new();
        self.emit_start_ring(&mut section, &sampler);

        let verts_per_ring = (self.num_sides + 1) as u32;
        for i in 1..=self.num_segments {
            let t = i as Real / self.num_segments as Real;
            let center = self.center_at(t);
            let scale = self.profile.scale_at(t) * self.radius;
            let phase = self.ring_phase_deg(i, &sampler);
            let ring = sampler.sample(center, self.profile.rotation_at(t), scale, phase);

            let ring_start = section.next_vertex_index();

            // First pass: positions, UVs and the strip triangles. Normals
            // need the whole ring in place, so they come second.
            // The twist phase is geometric only; u comes from the un-phased
            // angle so it stays inside [0, 1].
            for (side, point) in ring.iter().enumerate() {
                let uv = Point2::new(uv_u_for_angle(point.angle_deg - phase), t);
                let idx = section.push_position(point.position, uv);

                if side < self.num_sides {
                    section.push_triangle(idx, idx - verts_per_ring, idx - verts_per_ring + 1);
                    section.push_triangle(idx - verts_per_ring + 1, idx + 1, idx);
                }
            }

            // Second pass: normals from the edges to the previous ring and
            // its left/right neighbors, averaged and negated to face outward.
            for side in 0..=self.num_sides {
                if side == self.num_sides {
                    // Seam vertex shares the normal computed for side 0 of
                    // the same ring, keeping shading continuous across ±180°.
                    let seam_normal = section.normals()[ring_start as usize];
                    section.push_normal(seam_normal);
                    continue;
                }

                let vert_index = ring_start + side as u32;
                let normal = self.ring_vertex_normal(&section, vert_index, side, verts_per_ring, center);
                section.push_normal(normal);
            }
        }

        section
    }

    /// Three-edge averaged normal for one ring vertex: cross products of the
    /// edge down to the previous ring with the edges to that ring's left and
    /// right neighbors, normalized, summed and negated to face outward.
    fn ring_vertex_normal(
        &self,
        section: &MeshSection,
        vert_index: u32,
        side: usize,
        verts_per_ring: u32,
        ring_center: Point3<Real>,
    ) -> Vector3<Real> {
        let positions = section.positions();
        let vertex = positions[vert_index as usize];
        let prev_row = vert_index - verts_per_ring;

        let below = positions[prev_row as usize] - vertex;
        // Left neighbor on the previous ring; side 0 wraps past the seam
        // duplicate to the last distinct vertex of that ring.
        let left = if side == 0 {
            positions[(vert_index - 2) as usize] - vertex
        } else {
            positions[(prev_row - 1) as usize] - vertex
        };
        let right = positions[(prev_row + 1) as usize] - vertex;

        let cross_left = below.cross(&left).try_normalize(EPSILON).unwrap_or_default();
        let cross_right = right.cross(&below).try_normalize(EPSILON).unwrap_or_default();
        let normal = -(cross_left + cross_right);

        if normal.norm() > EPSILON {
            normal
        } else {
            // Both cross products vanished — the neighbors are collapsed
            // (e.g. the ring directly above a tapered tip). Radial direction
            // from the ring center is the best available stand-in.
            (vertex - ring_center)
                .try_normalize(EPSILON)
                .unwrap_or_else(|| -Vector3::z())
        }
    }

    /// Seeds the section with the `t = 0` ring. For capped profiles the
    /// scale is zero there, so all `num_sides + 1` entries collapse onto the
    /// start point with back-facing normals; keeping the full count preserves
    /// the per-side UV seam layout.
    fn emit_start_ring(&self, section: &mut MeshSection, sampler: &RingSampler) {
        let center = self.center_at(0.0);
        let scale = self.profile.scale_at(0.0) * self.radius;
        let phase = self.ring_phase_deg(0, sampler);
        let ring = sampler.sample(center, self.profile.rotation_at(0.0), scale, phase);

        let capped = self.profile.caps_start();
        let v_coord = if capped { TIP_UV_V } else { 0.0 };

        for point in &ring {
            let normal = if capped {
                -Vector3::z()
            } else {
                (point.position - center)
                    .try_normalize(EPSILON)
                    .unwrap_or_else(|| -Vector3::z())
            };
            let uv = Point2::new(uv_u_for_angle(point.angle_deg - phase), v_coord);
            section.push_vertex(point.position, normal, uv);
        }
    }
}
