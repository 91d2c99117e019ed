use math::hcm::{Point3, Vec3};

use crate::convex::ConvexShape;
use crate::error::GeometryError;

/// A convex polytope given by explicit vertex, face-normal and edge-direction lists.
///
/// Covers the shapes that have no dedicated type: convex meshes, and degenerate shapes such as
/// points and segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolytope {
    vertices: Vec<Point3>,
    face_normals: Vec<Vec3>,
    edge_directions: Vec<Vec3>,
}

/// Appends `dir` unless it is zero or parallel to a direction already present.
fn push_unique(dirs: &mut Vec<Vec3>, dir: Vec3) {
    if !dir.is_zero() && !dirs.iter().any(|d| d.is_parallel_to(dir)) {
        dirs.push(dir);
    }
}

impl ConvexPolytope {
    pub fn new(
        vertices: Vec<Point3>,
        face_normals: Vec<Vec3>,
        edge_directions: Vec<Vec3>,
    ) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::EmptyVertices);
        }
        Ok(ConvexPolytope {
            vertices,
            face_normals,
            edge_directions,
        })
    }

    /// A single point. It has no axes of its own; the other shape's axes decide.
    pub fn point(p: Point3) -> Self {
        ConvexPolytope {
            vertices: vec![p],
            face_normals: vec![],
            edge_directions: vec![],
        }
    }

    /// A line segment with one edge direction and no faces.
    pub fn segment(a: Point3, b: Point3) -> Self {
        let mut edge_directions = vec![];
        push_unique(&mut edge_directions, b - a);
        ConvexPolytope {
            vertices: vec![a, b],
            face_normals: vec![],
            edge_directions,
        }
    }

    /// Builds the polytope of a closed convex triangle mesh. Face normals and edge directions are
    /// collected from every triangle, skipping zero and parallel duplicates. Convexity of the mesh
    /// is not checked.
    /// ```
    /// use geometry::ConvexPolytope;
    /// use geometry::convex::ConvexShape;
    /// use math::hcm::point3;
    /// let tetra = ConvexPolytope::from_triangles(
    ///     vec![
    ///         point3(0.0, 0.0, 0.0),
    ///         point3(1.0, 0.0, 0.0),
    ///         point3(0.0, 1.0, 0.0),
    ///         point3(0.0, 0.0, 1.0),
    ///     ],
    ///     &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    /// )
    /// .unwrap();
    /// assert_eq!(tetra.face_normals().len(), 4);
    /// assert_eq!(tetra.edge_directions().len(), 6);
    /// ```
    pub fn from_triangles(
        vertices: Vec<Point3>,
        triangles: &[[usize; 3]],
    ) -> Result<Self, GeometryError> {
        if vertices.is_empty() {
            return Err(GeometryError::EmptyVertices);
        }
        let len = vertices.len();
        let mut face_normals = vec![];
        let mut edge_directions = vec![];
        for tri in triangles {
            if let Some(&index) = tri.iter().find(|&&i| i >= len) {
                return Err(GeometryError::VertexIndexOutOfRange { index, len });
            }
            let [p0, p1, p2] = [vertices[tri[0]], vertices[tri[1]], vertices[tri[2]]];
            push_unique(&mut face_normals, (p1 - p0).cross(p2 - p0));
            push_unique(&mut edge_directions, p1 - p0);
            push_unique(&mut edge_directions, p2 - p1);
            push_unique(&mut edge_directions, p0 - p2);
        }
        Ok(ConvexPolytope {
            vertices,
            face_normals,
            edge_directions,
        })
    }

    /// Copies any convex shape into an owned polytope.
    pub fn from_shape<S: ConvexShape + ?Sized>(shape: &S) -> Self {
        ConvexPolytope {
            vertices: shape.vertices().to_vec(),
            face_normals: shape.face_normals().to_vec(),
            edge_directions: shape.edge_directions().to_vec(),
        }
    }
}

impl ConvexShape for ConvexPolytope {
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
    use crate::{intersects, Aabb};
    use math::hcm::point3;

    fn unit_tetra() -> ConvexPolytope {
        ConvexPolytope::from_triangles(
            vec![
                point3(0.0, 0.0, 0.0),
                point3(1.0, 0.0, 0.0),
                point3(0.0, 1.0, 0.0),
                point3(0.0, 0.0, 1.0),
            ],
            &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_constructor_errors() {
        assert_eq!(
            ConvexPolytope::new(vec![], vec![], vec![]),
            Err(GeometryError::EmptyVertices)
        );
        assert_eq!(
            ConvexPolytope::from_triangles(vec![Point3::ORIGIN], &[[0, 0, 1]]),
            Err(GeometryError::VertexIndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_segment_collapses_zero_edge() {
        let p = point3(1.0, 2.0, 3.0);
        assert!(ConvexPolytope::segment(p, p).edge_directions().is_empty());
    }

    #[test]
    fn test_tetrahedron_against_boxes() {
        let tetra = unit_tetra();
        // Beyond the slanted face x + y + z = 1, but inside the tetrahedron's bounds.
        let near_miss = Aabb::new(point3(0.4, 0.4, 0.4), point3(0.6, 0.6, 0.6));
        assert!(!intersects(&tetra, &near_miss));
        assert!(!intersects(&near_miss, &tetra));

        let inside = Aabb::new(point3(0.1, 0.1, 0.1), point3(0.2, 0.2, 0.2));
        assert!(intersects(&tetra, &inside));
    }

    #[test]
    fn test_from_shape_keeps_answers() {
        let a = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        let copy = ConvexPolytope::from_shape(&a);
        assert_eq!(copy.vertices(), a.vertices());
        assert!(intersects(&copy, &unit_tetra()));
    }
}
