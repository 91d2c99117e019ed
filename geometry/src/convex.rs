//! Separating-axis intersection test for convex polytopes.
//!
//! Two convex polytopes are disjoint if and only if their projections are disjoint on at least
//! one of the following axes:
//! - a face normal of the first shape,
//! - a face normal of the second shape,
//! - the cross product of an edge direction of the first shape with one of the second shape.
//!
//! Any type implementing [`ConvexShape`] can take part in the test. Only the directions of the
//! axes matter: normals and edges need not be unit-length, and parallel faces or edges should be
//! listed once.

use itertools::iproduct;
use math::float::Interval;
use math::hcm::{Point3, Vec3};

/// The sufficient statistics of a convex polytope for the separating-axis test.
///
/// - `vertices()` must contain every extreme point of the shape and must not be empty. Interior
///   points are harmless.
/// - `face_normals()` lists one direction per family of parallel faces.
/// - `edge_directions()` lists one direction per family of parallel edges.
///
/// Leaving out a direction may turn a separated pair into a reported intersection. Extra
/// directions, including zero vectors, never change the result.
pub trait ConvexShape {
    fn vertices(&self) -> &[Point3];
    fn face_normals(&self) -> &[Vec3];
    fn edge_directions(&self) -> &[Vec3];
}

impl<S: ConvexShape + ?Sized> ConvexShape for &S {
    fn vertices(&self) -> &[Point3] {
        (**self).vertices()
    }
    fn face_normals(&self) -> &[Vec3] {
        (**self).face_normals()
    }
    fn edge_directions(&self) -> &[Vec3] {
        (**self).edge_directions()
    }
}

/// Projects the vertices of `shape` onto `axis` and returns the covered range of dot products.
///
/// The axis doesn't need to be normalized; both shapes in a test are scaled by the same factor.
/// A zero axis yields `[0, 0]`.
///
/// Panics if the shape has no vertices.
/// ```
/// use geometry::{convex::project, Aabb};
/// use math::hcm::{point3, vec3};
/// let cube = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
/// assert_eq!(project(&cube, vec3(1.0, 0.0, 0.0)).as_pair(), (0.0, 1.0));
/// assert_eq!(project(&cube, vec3(1.0, 1.0, 0.0)).as_pair(), (0.0, 2.0));
/// ```
pub fn project<S: ConvexShape + ?Sized>(shape: &S, axis: Vec3) -> Interval {
    let vertices = shape.vertices();
    assert!(!vertices.is_empty(), "cannot project a shape without vertices");
    let first = Interval::point(Vec3::from(vertices[0]).dot(axis));
    vertices[1..]
        .iter()
        .fold(first, |range, p| range.extend(Vec3::from(*p).dot(axis)))
}

/// Returns true if the projections of `a` and `b` onto `axis` overlap. Touching intervals
/// overlap.
pub fn intersect_along<A, B>(a: &A, b: &B, axis: Vec3) -> bool
where
    A: ConvexShape + ?Sized,
    B: ConvexShape + ?Sized,
{
    project(a, axis).overlaps(&project(b, axis))
}

/// Enumerates the candidate separating axes in test order: face normals of `a`, face normals of
/// `b`, then `cross(ea, eb)` for every edge pair. The sequence is lazy.
pub fn candidate_axes<'a, A, B>(a: &'a A, b: &'a B) -> impl Iterator<Item = Vec3> + 'a
where
    A: ConvexShape + ?Sized,
    B: ConvexShape + ?Sized,
{
    let edge_crosses = iproduct!(a.edge_directions().iter(), b.edge_directions().iter())
        .map(|(ea, eb)| ea.cross(*eb));
    a.face_normals()
        .iter()
        .chain(b.face_normals().iter())
        .copied()
        .chain(edge_crosses)
}

/// Returns the first candidate axis along which `a` and `b` are separated, or `None` if the
/// shapes intersect.
pub fn separating_axis<A, B>(a: &A, b: &B) -> Option<Vec3>
where
    A: ConvexShape + ?Sized,
    B: ConvexShape + ?Sized,
{
    candidate_axes(a, b).find(|axis| !intersect_along(a, b, *axis))
}

/// Returns true if the convex shapes `a` and `b` overlap (including touching boundaries).
///
/// Stops at the first separating axis, so grossly separated shapes cost a single projection pair.
/// ```
/// use geometry::{intersects, Aabb};
/// use math::hcm::point3;
/// let a = Aabb::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
/// let b = Aabb::new(point3(2.0, 0.0, 0.0), point3(3.0, 1.0, 1.0));
/// let c = Aabb::new(point3(0.5, 0.0, 0.0), point3(1.5, 1.0, 1.0));
/// assert!(!intersects(&a, &b));
/// assert!(intersects(&a, &c));
/// ```
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: ConvexShape + ?Sized,
    B: ConvexShape + ?Sized,
{
    separating_axis(a, b).is_none()
}
