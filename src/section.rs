//! `MeshSection` accumulator and the flat `MeshBuffers` it resolves into.

use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector3};

/// A self-contained geometry buffer: parallel vertex attribute sequences plus
/// a flat triangle-index list into its own local index space.
///
/// A section is created empty for one generation pass, filled by exactly one
/// generator, optionally combined with other sections via [`MeshSection::append`],
/// and finally consumed by [`MeshSection::into_buffers`]. It is never reused
/// across passes.
///
/// Normals may lag positions: a generator can push a ring of positions first
/// and come back for the normals once every neighbor it needs is known (see
/// [`push_position`](MeshSection::push_position) /
/// [`push_normal`](MeshSection::push_normal)). At completion the three
/// attribute sequences must have equal length.
#[derive(Debug, Clone, Default)]
pub struct MeshSection {
    positions: Vec<Point3<Real>>,
    normals: Vec<Vector3<Real>>,
    uvs: Vec<Point2<Real>>,
    triangles: Vec<u32>,
}

impl MeshSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with its normal and uv.
    ///
    /// Returns the index of the just-added vertex.
    pub fn push_vertex(
        &mut self,
        position: Point3<Real>,
        normal: Vector3<Real>,
        uv: Point2<Real>,
    ) -> u32 {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        (self.positions.len() - 1) as u32
    }

    /// Adds a vertex whose normal will be supplied later by
    /// [`push_normal`](Self::push_normal). Returns the vertex index.
    pub fn push_position(&mut self, position: Point3<Real>, uv: Point2<Real>) -> u32 {
        self.positions.push(position);
        self.uvs.push(uv);
        (self.positions.len() - 1) as u32
    }

    /// Supplies the normal for the oldest vertex still missing one.
    pub fn push_normal(&mut self, normal: Vector3<Real>) {
        debug_assert!(
            self.normals.len() < self.positions.len(),
            "push_normal without a pending position"
        );
        self.normals.push(normal);
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push(a);
        self.triangles.push(b);
        self.triangles.push(c);
    }

    /// Index the next pushed vertex will receive.
    pub fn next_vertex_index(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn positions(&self) -> &[Point3<Real>] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3<Real>] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Point2<Real>] {
        &self.uvs
    }

    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Concatenates `next` onto `self`, rebasing `next`'s triangle indices by
    /// `self`'s vertex count so both index spaces survive intact.
    pub fn append(mut self, next: MeshSection) -> MeshSection {
        debug_assert_eq!(self.positions.len(), self.normals.len());
        debug_assert_eq!(next.positions.len(), next.normals.len());

        let base = self.positions.len() as u32;
        self.positions.extend(next.positions);
        self.normals.extend(next.normals);
        self.uvs.extend(next.uvs);
        self.triangles.extend(next.triangles.iter().map(|i| i + base));
        self
    }

    /// Resolves the section into flat arrays for the external mesh consumer.
    pub fn into_buffers(self) -> MeshBuffers {
        debug_assert_eq!(
            self.positions.len(),
            self.normals.len(),
            "every vertex needs a normal before the section is resolved"
        );
        debug_assert_eq!(self.positions.len(), self.uvs.len());
        debug_assert_eq!(self.triangles.len() % 3, 0);
        debug_assert!(
            self.triangles
                .iter()
                .all(|&i| (i as usize) < self.positions.len()),
            "triangle index out of range"
        );

        MeshBuffers {
            positions: self.positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
            normals: self.normals.iter().map(|n| [n.x, n.y, n.z]).collect(),
            uvs: self.uvs.iter().map(|uv| [uv.x, uv.y]).collect(),
            indices: self.triangles,
        }
    }
}

/// Flat, length-consistent vertex/index arrays, ready to hand to whatever
/// consumes renderable meshes. Winding is outward-facing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshBuffers {
    pub positions: Vec<[Real; 3]>,
    pub normals: Vec<[Real; 3]>,
    pub uvs: Vec<[Real; 2]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
