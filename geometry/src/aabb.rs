use math::hcm::{Point3, Vec3};

use crate::bbox::BBox;
use crate::convex::ConvexShape;

/// The world axes serve as both the face normals and the edge directions of every axis-aligned
/// box: 6 faces and 12 edges collapse to 3 directions each.
static WORLD_AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Axis-aligned box as a convex shape for the separating-axis test.
///
/// Corner `i` takes the `max` coordinate on axis `k` when bit `k` of `i` is set, so corner 0 is
/// `min` and corner 7 is `max`. Use [`BBox`] for bounds arithmetic (union, containment) and turn
/// it into an `Aabb` for intersection queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    vertices: [Point3; 8],
}

impl Aabb {
    /// Builds the box spanned by `min` and `max`. Requires `min <= max` on every axis; this is only
    /// checked in debug builds.
    pub fn new(min: Point3, max: Point3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "invalid box: min {} is not below max {}",
            min,
            max
        );
        let mut vertices = [min; 8];
        for (i, corner) in vertices.iter_mut().enumerate() {
            for axis in 0..3 {
                if i & (1 << axis) != 0 {
                    corner[axis] = max[axis];
                }
            }
        }
        Aabb { vertices }
    }

    pub fn min(&self) -> Point3 {
        self.vertices[0]
    }
    pub fn max(&self) -> Point3 {
        self.vertices[7]
    }
}

impl From<BBox> for Aabb {
    fn from(b: BBox) -> Self {
        Aabb::new(b.min(), b.max())
    }
}

impl ConvexShape for Aabb {
    fn vertices(&self) -> &[Point3] {
        &self.vertices
    }
    fn face_normals(&self) -> &[Vec3] {
        &WORLD_AXES
    }
    fn edge_directions(&self) -> &[Vec3] {
        &WORLD_AXES
    }
}
