//! UV sphere geometry generation.
//!
//! Produces an indexed unit sphere with position, normal, and texture
//! coordinates. The y axis is the polar axis; the north pole is (0, 1, 0).
//! Pole rows and the seam column are duplicated so every vertex keeps its
//! own texture coordinate.

use std::f32::consts::{PI, TAU};

use super::types::SphereVertex;

/// Largest vertex count whose indices still fit a `u32` index buffer.
const MAX_VERTICES: u64 = u32::MAX as u64 + 1;

/// Errors raised while generating sphere geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("sphere needs at least one segment per axis (got {x_segments}x{y_segments})")]
    ZeroSegments { x_segments: u32, y_segments: u32 },

    #[error(
        "sphere resolution {x_segments}x{y_segments} exceeds 32-bit index range \
         ({vertex_count} vertices, {index_count} indices)"
    )]
    TooManySegments {
        x_segments: u32,
        y_segments: u32,
        vertex_count: u64,
        index_count: u64,
    },
}

/// CPU-side sphere geometry: immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGeometry {
    x_segments: u32,
    y_segments: u32,
    vertices: Vec<SphereVertex>,
    indices: Vec<u32>,
}

impl SphereGeometry {
    /// Generate a unit UV sphere.
    ///
    /// `x_segments` = longitude steps (columns), `y_segments` = latitude
    /// steps (rows). Produces `(x_segments + 1) * (y_segments + 1)` vertices
    /// in row-major order (y outer) and `6 * x_segments * y_segments`
    /// indices, two counter-clockwise triangles per quad seen from outside.
    pub fn generate(x_segments: u32, y_segments: u32) -> Result<Self, MeshError> {
        if x_segments == 0 || y_segments == 0 {
            return Err(MeshError::ZeroSegments {
                x_segments,
                y_segments,
            });
        }

        let (vertex_count, index_count) = Self::counts(x_segments, y_segments);
        if vertex_count > MAX_VERTICES || index_count > u64::from(u32::MAX) {
            return Err(MeshError::TooManySegments {
                x_segments,
                y_segments,
                vertex_count,
                index_count,
            });
        }

        let mut vertices = Vec::with_capacity(vertex_count as usize);
        for y in 0..=y_segments {
            let y_seg = y as f32 / y_segments as f32;
            for x in 0..=x_segments {
                let x_seg = x as f32 / x_segments as f32;
                let position = sphere_point(x_seg, y_seg);
                vertices.push(SphereVertex {
                    position,
                    normal: position, // unit sphere: normal == position
                    tex_coord: [x_seg, y_seg],
                });
            }
        }

        let row = x_segments + 1;
        let mut indices = Vec::with_capacity(index_count as usize);
        for y in 0..y_segments {
            for x in 0..x_segments {
                let top = y * row + x;
                let bottom = (y + 1) * row + x;

                indices.extend_from_slice(&[bottom, top, top + 1]);
                indices.extend_from_slice(&[bottom, top + 1, bottom + 1]);
            }
        }

        Ok(Self {
            x_segments,
            y_segments,
            vertices,
            indices,
        })
    }

    /// Vertex and index counts for a resolution. Saturates at `u64::MAX`
    /// instead of overflowing.
    pub fn counts(x_segments: u32, y_segments: u32) -> (u64, u64) {
        let x = u64::from(x_segments);
        let y = u64::from(y_segments);
        (
            (x + 1).saturating_mul(y + 1),
            x.saturating_mul(y).saturating_mul(6),
        )
    }

    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn x_segments(&self) -> u32 {
        self.x_segments
    }

    pub fn y_segments(&self) -> u32 {
        self.y_segments
    }

    /// The vertex generated for grid cell `(x, y)`, if in range.
    pub fn vertex_at(&self, x: u32, y: u32) -> Option<&SphereVertex> {
        if x > self.x_segments || y > self.y_segments {
            return None;
        }
        let idx = y as usize * (self.x_segments as usize + 1) + x as usize;
        self.vertices.get(idx)
    }
}

/// Map segment fractions in `[0, 1]` to a point on the unit sphere.
fn sphere_point(x_seg: f32, y_seg: f32) -> [f32; 3] {
    let theta = x_seg * TAU;
    let phi = y_seg * PI;

    let sin_phi = phi.sin();
    [theta.cos() * sin_phi, phi.cos(), theta.sin() * sin_phi]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::matrix::{cross, dot, length, sub};

    const EPS: f32 = 1e-5;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() < EPS,
                "component {i}: {:?} != {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn counts_for_various_resolutions() {
        for (x, y) in [(1, 1), (3, 7), (25, 25), (64, 48)] {
            let mesh = SphereGeometry::generate(x, y).unwrap();
            assert_eq!(mesh.vertex_count(), ((x + 1) * (y + 1)) as usize);
            assert_eq!(mesh.index_count(), (6 * x * y) as usize);
        }
    }

    #[test]
    fn zero_segments_rejected() {
        assert_eq!(
            SphereGeometry::generate(0, 4),
            Err(MeshError::ZeroSegments {
                x_segments: 0,
                y_segments: 4
            })
        );
        assert!(matches!(
            SphereGeometry::generate(4, 0),
            Err(MeshError::ZeroSegments { .. })
        ));
    }

    #[test]
    fn oversized_resolution_rejected_before_allocating() {
        let err = SphereGeometry::generate(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, MeshError::TooManySegments { .. }));

        // 6 * 40000 * 20000 overflows u32 even though the vertex count fits
        let err = SphereGeometry::generate(40_000, 20_000).unwrap_err();
        match err {
            MeshError::TooManySegments { index_count, .. } => {
                assert_eq!(index_count, 6 * 40_000 * 20_000)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn vertices_lie_on_unit_sphere_and_normals_equal_positions() {
        let mesh = SphereGeometry::generate(17, 9).unwrap();
        for (i, v) in mesh.vertices().iter().enumerate() {
            assert!(
                (length(v.position) - 1.0).abs() < EPS,
                "vertex {i}: |p| = {}",
                length(v.position)
            );
            assert_eq!(v.normal, v.position, "vertex {i}");
        }
    }

    #[test]
    fn indices_in_range() {
        let mesh = SphereGeometry::generate(13, 5).unwrap();
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices().iter().all(|&i| i < n));
    }

    #[test]
    fn pole_rows_collapse_to_poles() {
        let mesh = SphereGeometry::generate(8, 6).unwrap();
        for x in 0..=8 {
            let north = mesh.vertex_at(x, 0).unwrap();
            let south = mesh.vertex_at(x, 6).unwrap();
            assert_close(north.position, [0.0, 1.0, 0.0]);
            assert_close(south.position, [0.0, -1.0, 0.0]);
        }
    }

    #[test]
    fn seam_shares_position_but_not_tex_coord() {
        let mesh = SphereGeometry::generate(10, 4).unwrap();
        for y in 0..=4 {
            let first = mesh.vertex_at(0, y).unwrap();
            let last = mesh.vertex_at(10, y).unwrap();
            assert_close(first.position, last.position);
            let y_seg = y as f32 / 4.0;
            assert_eq!(first.tex_coord, [0.0, y_seg]);
            assert_eq!(last.tex_coord, [1.0, y_seg]);
        }
    }

    #[test]
    fn four_by_two_scenario() {
        let mesh = SphereGeometry::generate(4, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.index_count(), 48);

        let v = mesh.vertex_at(0, 0).unwrap();
        assert_close(v.position, [0.0, 1.0, 0.0]);
        assert_eq!(v.tex_coord, [0.0, 0.0]);

        let v = mesh.vertex_at(2, 1).unwrap();
        assert_eq!(v, &mesh.vertices()[7]);
        assert_close(v.position, [-1.0, 0.0, 0.0]);
        assert_eq!(v.tex_coord, [0.5, 0.5]);
    }

    #[test]
    fn first_quad_uses_row_major_indices() {
        let mesh = SphereGeometry::generate(4, 2).unwrap();
        // row stride = 5
        assert_eq!(&mesh.indices()[..6], &[5, 0, 1, 5, 1, 6]);
        // last quad: y = 1, x = 3
        assert_eq!(&mesh.indices()[42..], &[13, 8, 9, 13, 9, 14]);
    }

    #[test]
    fn triangles_face_outward() {
        let mesh = SphereGeometry::generate(16, 8).unwrap();
        let verts = mesh.vertices();
        let mut checked = 0;

        for tri in mesh.indices().chunks_exact(3) {
            let a = verts[tri[0] as usize].position;
            let b = verts[tri[1] as usize].position;
            let c = verts[tri[2] as usize].position;

            let normal = cross(sub(b, a), sub(c, a));
            // pole triangles collapse to zero area
            if length(normal) < 1e-6 {
                continue;
            }
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            assert!(
                dot(normal, centroid) > 0.0,
                "triangle {tri:?} faces inward"
            );
            checked += 1;
        }

        // every quad except one degenerate triangle per pole-row quad
        assert_eq!(checked, 2 * 16 * 8 - 2 * 16);
    }

    #[test]
    fn vertex_at_out_of_range_is_none() {
        let mesh = SphereGeometry::generate(3, 3).unwrap();
        assert!(mesh.vertex_at(4, 0).is_none());
        assert!(mesh.vertex_at(0, 4).is_none());
        assert!(mesh.vertex_at(3, 3).is_some());
    }

    #[test]
    fn generation_is_deterministic() {
        let a = SphereGeometry::generate(25, 25).unwrap();
        let b = SphereGeometry::generate(25, 25).unwrap();
        assert_eq!(a, b);
    }
}
