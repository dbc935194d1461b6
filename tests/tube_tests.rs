use approx::assert_abs_diff_eq;
use nalgebra::{Point3, Rotation3, Vector3};
use snakegen::{
    CylinderProfile, EndCapProfile, TubeGenerator, TubeProfile,
    float_types::Real,
};

const TOL: Real = 1e-6;

/// Swings the ring axis from +Z at the start to +X at the far end.
struct SwungAxisProfile;

impl TubeProfile for SwungAxisProfile {
    fn rotation_at(&self, t: Real) -> Real {
        90.0 * t
    }
}

#[test]
fn uniform_tube_vertex_and_triangle_counts() {
    for (sides, segments) in [(3usize, 1usize), (4, 2), (8, 5), (24, 16)] {
        let tube = TubeGenerator::new(Point3::origin(), 1.0, sides, segments, 0.5, CylinderProfile);
        let section = tube.create_section();

        assert_eq!(
            section.vertex_count(),
            (sides + 1) * (segments + 1),
            "vertex count for {sides} sides x {segments} segments"
        );
        assert_eq!(
            section.triangle_count(),
            2 * sides * segments,
            "triangle count for {sides} sides x {segments} segments"
        );
    }
}

#[test]
fn every_index_references_a_vertex_of_its_own_section() {
    let tube = TubeGenerator::new(Point3::origin(), 2.0, 12, 7, 0.3, CylinderProfile);
    let buffers = tube.create_section().into_buffers();

    assert_eq!(buffers.indices.len() % 3, 0);
    for &i in &buffers.indices {
        assert!(
            (i as usize) < buffers.vertex_count(),
            "index {i} out of range for {} vertices",
            buffers.vertex_count()
        );
    }
}

#[test]
fn ring_seam_vertices_are_positionally_coincident() {
    let sides = 9;
    let segments = 4;
    let tube = TubeGenerator::new(Point3::new(1.0, -2.0, 0.5), 1.5, sides, segments, 0.7, CylinderProfile);
    let buffers = tube.create_section().into_buffers();

    for ring in 0..=segments {
        let first = buffers.positions[ring * (sides + 1)];
        let seam = buffers.positions[ring * (sides + 1) + sides];
        for axis in 0..3 {
            assert_abs_diff_eq!(first[axis], seam[axis], epsilon = TOL);
        }
    }
}

#[test]
fn seam_vertex_reuses_the_side_zero_normal() {
    let sides = 6;
    let tube = TubeGenerator::new(Point3::origin(), 1.0, sides, 3, 0.5, CylinderProfile);
    let buffers = tube.create_section().into_buffers();

    for ring in 1..=3 {
        let base = ring * (sides + 1);
        assert_eq!(
            buffers.normals[base],
            buffers.normals[base + sides],
            "ring {ring} seam normal differs from side 0"
        );
    }
}

#[test]
fn cylinder_normals_face_outward() {
    let sides = 16;
    let segments = 4;
    let length = 2.0;
    let tube = TubeGenerator::new(Point3::origin(), length, sides, segments, 0.5, CylinderProfile);
    let buffers = tube.create_section().into_buffers();

    for ring in 1..=segments {
        let t = ring as Real / segments as Real;
        let center = Vector3::new(0.0, 0.0, t * length);
        for side in 0..=sides {
            let idx = ring * (sides + 1) + side;
            let p = Vector3::new(
                buffers.positions[idx][0],
                buffers.positions[idx][1],
                buffers.positions[idx][2],
            );
            let n = Vector3::new(
                buffers.normals[idx][0],
                buffers.normals[idx][1],
                buffers.normals[idx][2],
            );
            let radial = p - center;
            assert!(
                n.dot(&radial) > 0.0,
                "normal at ring {ring} side {side} points inward"
            );
        }
    }
}

// The concrete scenario from the design discussion: a unit-length square
// tube with one segment.
#[test]
fn four_sided_single_segment_cylinder_scenario() {
    let radius = 0.5;
    let tube = TubeGenerator::new(Point3::origin(), 1.0, 4, 1, radius, CylinderProfile);
    let buffers = tube.create_section().into_buffers();

    assert_eq!(buffers.vertex_count(), 10, "5 start-ring + 5 end-ring vertices");
    assert_eq!(buffers.triangle_count(), 8);

    let end_center = Point3::new(0.0, 0.0, 1.0);
    for idx in 5..10 {
        let p = buffers.positions[idx];
        assert_abs_diff_eq!(p[2], end_center.z, epsilon = TOL);
        let r = ((p[0] - end_center.x).powi(2) + (p[1] - end_center.y).powi(2)).sqrt();
        assert_abs_diff_eq!(r, radius, epsilon = TOL);
    }
}

#[test]
fn unit_power_endcap_tapers_to_half_radius_at_midpoint() {
    let radius = 0.8;
    let length = 1.0;
    let tube = TubeGenerator::new(
        Point3::origin(),
        length,
        8,
        2,
        radius,
        EndCapProfile::default(),
    );
    let buffers = tube.create_section().into_buffers();

    // Ring at t = 0.5 starts after the 9 collapsed tip vertices.
    let mid_center = Point3::new(0.0, 0.0, 0.5 * length);
    for side in 0..=8 {
        let p = buffers.positions[9 + side];
        assert_abs_diff_eq!(p[2], mid_center.z, epsilon = TOL);
        let r = (p[0].powi(2) + p[1].powi(2)).sqrt();
        assert_abs_diff_eq!(r, 0.5 * radius, epsilon = TOL);
    }
}

#[test]
fn endcap_tip_vertices_collapse_with_back_facing_normals() {
    let start = Point3::new(0.0, 1.0, -2.0);
    let tube = TubeGenerator::new(start, 0.5, 6, 4, 0.5, EndCapProfile::default());
    let buffers = tube.create_section().into_buffers();

    for side in 0..=6 {
        let p = buffers.positions[side];
        assert_abs_diff_eq!(p[0], start.x, epsilon = TOL);
        assert_abs_diff_eq!(p[1], start.y, epsilon = TOL);
        assert_abs_diff_eq!(p[2], start.z, epsilon = TOL);
        assert_eq!(buffers.normals[side], [0.0, 0.0, -1.0]);
        // The tip's axial UV sits just above zero, off the degenerate seam.
        assert!(buffers.uvs[side][1] > 0.0 && buffers.uvs[side][1] < 1e-3);
    }

    assert!(
        buffers.normals.iter().flatten().all(|c| c.is_finite()),
        "tip-adjacent normals must not degenerate to NaN"
    );
}

#[test]
fn radials_bias_packs_rings_toward_the_tip() {
    let biased = TubeGenerator::new(
        Point3::origin(),
        1.0,
        4,
        4,
        0.5,
        EndCapProfile {
            radials_bias: 2.0,
            ..EndCapProfile::default()
        },
    );
    let buffers = biased.create_section().into_buffers();

    // Ring i sits at z = (i/4)^2: spacing grows away from the tip.
    let ring_z: Vec<Real> = (0..=4).map(|i| buffers.positions[i * 5][2]).collect();
    assert_abs_diff_eq!(ring_z[1], 0.0625, epsilon = TOL);
    assert_abs_diff_eq!(ring_z[2], 0.25, epsilon = TOL);
    assert_abs_diff_eq!(ring_z[4], 1.0, epsilon = TOL);
    for w in ring_z.windows(2) {
        assert!(w[1] - w[0] > 0.0, "rings must advance monotonically");
    }
}

#[test]
fn axial_rotation_policy_tilts_each_ring_plane() {
    let sides = 8;
    let segments = 4;
    let length = 2.0;
    let radius = 0.5;
    let tube = TubeGenerator::new(Point3::origin(), length, sides, segments, radius, SwungAxisProfile);
    let buffers = tube.create_section().into_buffers();

    for ring in 0..=segments {
        let t = ring as Real / segments as Real;
        let center = Point3::new(0.0, 0.0, t * length);
        let axis = Rotation3::from_axis_angle(
            &Vector3::y_axis(),
            (90.0 * t).to_radians(),
        ) * Vector3::z();

        for side in 0..=sides {
            let p = buffers.positions[ring * (sides + 1) + side];
            let offset = Vector3::new(p[0] - center.x, p[1] - center.y, p[2] - center.z);
            assert_abs_diff_eq!(offset.dot(&axis), 0.0, epsilon = TOL);
            assert_abs_diff_eq!(offset.norm(), radius, epsilon = TOL);
        }
    }

    // At the far end the axis has swung to +X, so that ring spans YZ.
    let last_ring = segments * (sides + 1);
    for side in 0..=sides {
        assert_abs_diff_eq!(buffers.positions[last_ring + side][0], 0.0, epsilon = TOL);
    }
}

#[test]
fn twist_alternation_phase_shifts_odd_rings() {
    let sides = 8;
    let tube = TubeGenerator::new(Point3::origin(), 1.0, sides, 2, 0.5, CylinderProfile)
        .with_twist(false);
    let buffers = tube.create_section().into_buffers();

    let half_step = snakegen::float_types::TAU / sides as Real / 2.0;

    // Ring 1 is twisted: its first vertex is rotated half a step off the
    // straight-down seam direction. Ring 2 is back in phase with ring 0.
    let ring0 = buffers.positions[0];
    let ring1 = buffers.positions[sides + 1];
    let ring2 = buffers.positions[2 * (sides + 1)];

    assert_abs_diff_eq!(ring0[0], 0.0, epsilon = TOL);
    assert_abs_diff_eq!(ring0[1], -0.5, epsilon = TOL);

    let expected_x = 0.5 * half_step.sin();
    let expected_y = -0.5 * half_step.cos();
    assert_abs_diff_eq!(ring1[0], expected_x, epsilon = TOL);
    assert_abs_diff_eq!(ring1[1], expected_y, epsilon = TOL);

    assert_abs_diff_eq!(ring2[0], ring0[0], epsilon = TOL);
    assert_abs_diff_eq!(ring2[1], ring0[1], epsilon = TOL);
}

#[test]
fn twisted_ring_uvs_keep_the_unit_range() {
    let sides = 8;
    let tube = TubeGenerator::new(Point3::origin(), 1.0, sides, 2, 0.5, CylinderProfile)
        .with_twist(false);
    let buffers = tube.create_section().into_buffers();

    // The twist phase shifts geometry only; on the twisted ring 1 the
    // u-coordinate still runs 0..1 from seam to seam.
    let base = sides + 1;
    assert_abs_diff_eq!(buffers.uvs[base][0], 0.0, epsilon = TOL);
    assert_abs_diff_eq!(buffers.uvs[base + sides][0], 1.0, epsilon = TOL);
    for side in 0..=sides {
        let u = buffers.uvs[base + side][0];
        assert!((0.0..=1.0).contains(&u), "u = {u} escaped the unit range");
        assert_abs_diff_eq!(u, side as Real / sides as Real, epsilon = TOL);
    }
}
