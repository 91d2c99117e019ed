use std::convert::TryFrom;

use math::hcm::{Mat4, Point3, Vec3, Vec4};

use crate::bbox::BBox;
use crate::convex::ConvexShape;
use crate::error::GeometryError;

/// Corner triples `(i0, i1, i2)` of the clip cube; each face normal is
/// `cross(v[i1] - v[i0], v[i2] - v[i0])`. In clip space all five point into the cube.
/// Order: near (z = -1), left (x = -1), right (x = +1), bottom (y = -1), top (y = +1).
/// The far face is parallel to the near face.
const FACE_CORNERS: [(usize, usize, usize); 5] =
    [(0, 1, 2), (4, 0, 2), (1, 5, 3), (0, 4, 1), (2, 3, 6)];

/// Corner pairs `(i0, i1)`; each edge direction is `v[i1] - v[i0]`. One horizontal and one
/// vertical edge of the near face (the far face's edges are parallel to them), then the four
/// lateral edges running from near to far.
const EDGE_CORNERS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 4), (1, 5), (2, 6), (3, 7)];

/// The view volume of a camera, as a convex shape in world space.
///
/// The 8 vertices are the corners of the clip cube `(±1, ±1, ±1)` mapped back through the inverse
/// view-projection matrix. Corner `i` has `x = +1` when `i & 1` is set, `y = +1` for `i & 2` and
/// `z = +1` (far) for `i & 4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    vertices: [Point3; 8],
    face_normals: [Vec3; 5],
    edge_directions: [Vec3; 6],
}

fn clip_corner(i: usize) -> Vec4 {
    let sign = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
    Vec4::new(sign(1), sign(2), sign(4), 1.0)
}

impl Frustum {
    /// Builds the frustum of a `projection * view` matrix (OpenGL clip conventions, column
    /// vectors).
    ///
    /// The matrix must be invertible; this is only checked in debug builds. Use `try_new()` when
    /// the matrix may be degenerate.
    pub fn new(view_projection: Mat4) -> Self {
        let inverse = view_projection.inverse();
        let mut vertices = [Point3::ORIGIN; 8];
        for (i, v) in vertices.iter_mut().enumerate() {
            let h = inverse * clip_corner(i);
            *v = Point3::new(h.x / h.w, h.y / h.w, h.z / h.w);
        }
        Self::from_corners(vertices)
    }

    /// Like `new()`, but reports a singular matrix or a corner at infinity as an error.
    pub fn try_new(view_projection: Mat4) -> Result<Self, GeometryError> {
        let inverse = view_projection
            .try_inverse()
            .ok_or(GeometryError::SingularMatrix {
                determinant: view_projection.determinant(),
            })?;
        let mut vertices = [Point3::ORIGIN; 8];
        for (i, v) in vertices.iter_mut().enumerate() {
            *v = Point3::try_from(inverse * clip_corner(i))
                .map_err(|_| GeometryError::PointAtInfinity { corner: i })?;
        }
        Ok(Self::from_corners(vertices))
    }

    fn from_corners(vertices: [Point3; 8]) -> Self {
        let normal = |(i0, i1, i2): (usize, usize, usize)| {
            (vertices[i1] - vertices[i0]).cross(vertices[i2] - vertices[i0])
        };
        let edge = |(i0, i1): (usize, usize)| vertices[i1] - vertices[i0];

        let mut face_normals = [Vec3::ZERO; 5];
        for (n, corners) in face_normals.iter_mut().zip(FACE_CORNERS.iter()) {
            *n = normal(*corners);
        }
        let mut edge_directions = [Vec3::ZERO; 6];
        for (e, corners) in edge_directions.iter_mut().zip(EDGE_CORNERS.iter()) {
            *e = edge(*corners);
        }
        Frustum {
            vertices,
            face_normals,
            edge_directions,
        }
    }

    /// Returns corner `i` (see the type documentation for the numbering).
    pub fn corner(&self, i: usize) -> Point3 {
        self.vertices[i]
    }

    /// Axis-aligned bounds of the view volume, useful as a cheap first rejection test.
    pub fn bounds(&self) -> BBox {
        BBox::from_points(&self.vertices)
    }
}

impl ConvexShape for Frustum {
    fn vertices(&self) -> &[Point3] {
        &self.vertices
    }
    fn face_normals(&self) -> &[Vec3] {
        &self.face_normals
    }
    fn edge_directions(&self) -> &[Vec3] {
        &self.edge_directions
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::assert_le;
    use math::hcm::{point3, vec3};

    #[test]
    fn test_identity_is_clip_cube() {
        let f = Frustum::new(Mat4::IDENTITY);
        for i in 0..8 {
            let expected = clip_corner(i);
            assert_eq!(f.corner(i), point3(expected.x, expected.y, expected.z));
        }
        // Normals point into the cube in clip space.
        let center = Point3::ORIGIN;
        for ((i0, _, _), n) in FACE_CORNERS.iter().zip(f.face_normals()) {
            assert!((center - f.corner(*i0)).dot(*n) > 0.0);
        }
        assert_eq!(f.face_normals()[0], vec3(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_perspective_corners() {
        let proj = Mat4::perspective(math::new_deg(90.0), 1.0, 1.0, 10.0);
        let f = Frustum::new(proj);
        // Near plane at z = -1 spans [-1, 1] in x and y for a 90 degree fov.
        math::assert_close!(Vec3::from(f.corner(0)), vec3(-1.0, -1.0, -1.0));
        math::assert_close!(Vec3::from(f.corner(3)), vec3(1.0, 1.0, -1.0));
        // Far plane at z = -10 spans [-10, 10].
        let far = f.corner(7);
        assert_le!((far.x - 10.0).abs(), 1e-3);
        assert_le!((far.z + 10.0).abs(), 1e-3);

        let bounds = f.bounds();
        assert_le!((bounds.min().z + 10.0).abs(), 1e-3);
        assert_le!((bounds.max().z + 1.0).abs(), 1e-4);
    }

    #[test]
    fn test_consistent_winding() {
        let proj = Mat4::perspective(math::new_deg(60.0), 1.5, 0.1, 100.0);
        let view = Mat4::rotater(vec3(0.3, 1.0, -0.2), math::new_deg(40.0))
            * Mat4::translater(vec3(-3.0, 1.0, 2.0));
        let f = Frustum::new(proj * view);
        let center = f
            .vertices()
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc + Vec3::from(*p))
            / 8.0;
        let signs = FACE_CORNERS
            .iter()
            .zip(f.face_normals())
            .map(|((i0, _, _), n)| (Point3::from(center) - f.corner(*i0)).dot(*n) > 0.0)
            .collect::<Vec<_>>();
        assert!(
            signs.iter().all(|s| *s == signs[0]),
            "mixed winding: {:?}",
            signs
        );
    }

    #[test]
    fn test_edges_follow_corner_pairs() {
        let f = Frustum::new(Mat4::perspective(math::new_deg(90.0), 2.0, 0.5, 20.0));
        for ((i0, i1), e) in EDGE_CORNERS.iter().zip(f.edge_directions()) {
            assert_eq!(*e, f.corner(*i1) - f.corner(*i0));
        }
        // The near horizontal edge is parallel to the far horizontal edge.
        assert!(f.edge_directions()[0].is_parallel_to(f.corner(7) - f.corner(6)));
        assert!(f.edge_directions()[1].is_parallel_to(f.corner(7) - f.corner(5)));
    }

    #[test]
    fn test_try_new_rejects_singular() {
        let singular = Mat4::nonuniform_scale(vec3(1.0, 1.0, 0.0));
        assert!(matches!(
            Frustum::try_new(singular),
            Err(GeometryError::SingularMatrix { .. })
        ));
        let proj = Mat4::perspective(math::new_deg(90.0), 1.0, 0.1, 100.0);
        assert_eq!(Frustum::try_new(proj).unwrap(), Frustum::new(proj));
    }
}
