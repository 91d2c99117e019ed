use math::hcm::{Point3, Vec3};

use crate::bbox::BBox;
use crate::convex::ConvexShape;
use crate::transform::{AffineTransform, Transform};

/// A box carried through an affine transform: rotated, sheared or non-uniformly scaled.
///
/// Edge directions are the images of the 3 world axes. Face normals are computed as the cross
/// products of pairs of edges rather than by transforming the local normals, which stays correct
/// under non-uniform scale and shear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    vertices: [Point3; 8],
    face_normals: [Vec3; 3],
    edge_directions: [Vec3; 3],
}

impl OrientedBox {
    pub fn new(local: BBox, transform: &AffineTransform) -> Self {
        let mut vertices = local.all_corners();
        for v in vertices.iter_mut() {
            *v = transform.apply(*v);
        }
        let edges = [
            transform.apply(Vec3::X),
            transform.apply(Vec3::Y),
            transform.apply(Vec3::Z),
        ];
        OrientedBox {
            vertices,
            face_normals: [
                edges[1].cross(edges[2]),
                edges[2].cross(edges[0]),
                edges[0].cross(edges[1]),
            ],
            edge_directions: edges,
        }
    }

    pub fn center(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc + Vec3::from(*p));
        Point3::from(sum / 8.0)
    }

    /// The axis-aligned bounds of the transformed box.
    pub fn bounds(&self) -> BBox {
        BBox::from_points(&self.vertices)
    }
}

impl ConvexShape for OrientedBox {
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
