use math::hcm::{Mat4, Point3, Vec3};
use math::Angle;
use std::ops::Mul;

use crate::bbox::BBox;

/// Affine transform from object space to world space. Degenerate (flattening) transforms are
/// allowed; a flattened box is still a valid convex shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    forward: Mat4,
}

pub trait Transform<T> {
    fn apply(&self, x: T) -> T;
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            forward: Mat4::IDENTITY,
        }
    }
    pub fn translater(t: Vec3) -> Self {
        Self {
            forward: Mat4::translater(t),
        }
    }
    pub fn rotater(axis: Vec3, angle: Angle) -> Self {
        Self {
            forward: Mat4::rotater(axis, angle),
        }
    }
    pub fn rotater_y(angle: Angle) -> Self {
        Self {
            forward: Mat4::rotater_y(angle),
        }
    }
    pub fn scaler(scale: Vec3) -> Self {
        Self {
            forward: Mat4::nonuniform_scale(scale),
        }
    }
    pub fn matrix(&self) -> Mat4 {
        self.forward
    }

    /// Applies Translate(t) onto the transform, and returns Translate(t) * self.
    pub fn translate(self, t: Vec3) -> Self {
        Self::translater(t) * self
    }

    /// Applies rotation onto the transform, and returns Rotate(angle) * self.
    pub fn rotate_y(self, angle: Angle) -> Self {
        Self::rotater_y(angle) * self
    }
}

impl From<Mat4> for AffineTransform {
    fn from(forward: Mat4) -> Self {
        Self { forward }
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            forward: self.forward * rhs.forward,
        }
    }
}

// Transforms on:
// - Vec3 (directions, translation ignored)
// - Point3
// - BBox (the axis-aligned bounds of the transformed box)
// -------------------------------------------------------------------------------------------------

impl Transform<Vec3> for AffineTransform {
    fn apply(&self, x: Vec3) -> Vec3 {
        self.forward * x
    }
}
impl Transform<Point3> for AffineTransform {
    fn apply(&self, p: Point3) -> Point3 {
        self.forward * p
    }
}
impl Transform<BBox> for AffineTransform {
    fn apply(&self, b: BBox) -> BBox {
        b.all_corners()
            .iter()
            .fold(BBox::empty(), |res_box, corner| res_box.union(self.apply(*corner)))
    }
}
