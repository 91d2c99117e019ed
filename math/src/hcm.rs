use core::convert::TryFrom;
use std::{
    fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub},
};

use crate::Angle;

pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

pub fn point3(x: f32, y: f32, z: f32) -> Point3 {
    Point3::new(x, y, z)
}

pub use glam::Vec4;

/// Represents a 3D vector. Each component is a `f32` number.
/// Components can be accessed using `v.x` `v.y` `v.z`,
/// or indices `v[i]` where i is 0, 1, or 2.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}
impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "[{:.p$}, {:.p$}, {:.p$}]",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const X: Vec3 = Self::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Self::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Self::new(0.0, 0.0, 1.0);
    pub const ZERO: Vec3 = Self::new(0.0, 0.0, 0.0);

    pub fn dot(self, v: Vec3) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
    pub fn cross(self, v: Vec3) -> Vec3 {
        // x1 y1 z1
        // x2 y2 z2
        // i  j  k
        Vec3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn norm_squared(self) -> f32 {
        self.dot(self)
    }
    pub fn norm(self) -> f32 {
        f32::sqrt(self.norm_squared())
    }
    pub fn is_zero(self) -> bool {
        self.norm_squared() == 0.0
    }

    /// Returns a normalized (unit-length) `self` vector.
    /// Panics if the vector length is zero, NaN or infinite.
    pub fn hat(self) -> Vec3 {
        let norm2 = self.norm_squared();
        assert!(norm2 != 0.0 && norm2.is_finite());
        let inv_sqrt = 1.0 / self.norm();
        self * inv_sqrt
    }

    /// Returns true if `self` and `other` point along the same line (either sense). Zero vectors
    /// are parallel to everything.
    /// ```
    /// use math::hcm::vec3;
    /// assert!(vec3(1.0, 2.0, 0.0).is_parallel_to(vec3(-2.0, -4.0, 0.0)));
    /// assert!(!vec3(1.0, 0.0, 0.0).is_parallel_to(vec3(0.0, 1.0, 0.0)));
    /// ```
    pub fn is_parallel_to(self, other: Self) -> bool {
        let scale = self.norm_squared() * other.norm_squared();
        self.cross(other).norm_squared() <= scale * 1e-8
    }

    fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Add<Point3> for Vec3 {
    type Output = Point3;
    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("invalid index"),
        }
    }
}
impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("invalid index"),
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}
impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, s: f32) -> Vec3 {
        Vec3::new(self.x / s, self.y / s, self.z / s)
    }
}

// Implementation of Points
impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3 { x, y, z }
    }
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub fn squared_distance_to(self, p: Self) -> f32 {
        (self - p).norm_squared()
    }
    pub fn as_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, 1.0)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, v: Vec3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, from: Point3) -> Vec3 {
        Vec3::new(self.x - from.x, self.y - from.y, self.z - from.z)
    }
}
impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, t: Vec3) -> Point3 {
        Point3::new(self.x - t.x, self.y - t.y, self.z - t.z)
    }
}
impl Index<usize> for Point3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("invalid index"),
        }
    }
}
impl IndexMut<usize> for Point3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("invalid index"),
        }
    }
}

// Explicit conversion between Vec3 and Point3.
// -------------------------------------------------------------------------------------------------
impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl TryFrom<Vec4> for Point3 {
    type Error = &'static str;
    fn try_from(value: Vec4) -> Result<Self, Self::Error> {
        if value.w == 1.0 {
            Ok(Point3::new(value.x, value.y, value.z))
        } else if value.w == 0.0 {
            Err("homogeneous coordinate is zero")
        } else {
            let w = value.w;
            Ok(Point3::new(value.x / w, value.y / w, value.z / w))
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Column-major 4x4 matrix. `m.cols[c][r]` is the element at row `r`, column `c`, and `m * v`
/// treats `v` as a column vector, the same convention the GPU-side code uses for
/// `projection * view * model`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4 {
        cols: [Vec4::ZERO; 4],
    };
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Mat4 {
        Mat4 {
            cols: [c0, c1, c2, c3],
        }
    }
    pub fn translater(t: Vec3) -> Mat4 {
        let mut mat = Self::IDENTITY;
        mat.cols[3] = Vec4::new(t.x, t.y, t.z, 1.0);
        mat
    }
    pub fn nonuniform_scale(s: Vec3) -> Mat4 {
        let mut mat = Self::IDENTITY;
        mat.cols[0][0] = s[0];
        mat.cols[1][1] = s[1];
        mat.cols[2][2] = s[2];
        mat
    }
    pub fn scaler(s: f32) -> Mat4 {
        Self::nonuniform_scale(Vec3::new(s, s, s))
    }

    /// Right-handed rotation about `axis` (any non-zero length) by `angle`.
    pub fn rotater(axis: Vec3, angle: Angle) -> Mat4 {
        Self::from_glam(glam::Mat4::from_axis_angle(
            axis.hat().to_glam(),
            angle.to_rad(),
        ))
    }

    /// Right-handed rotation about the y-axis: x -> (cos, 0, -sin), z -> (sin, 0, cos).
    pub fn rotater_y(angle: Angle) -> Mat4 {
        let (sin_t, cos_t) = angle.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.cols[0] = Vec4::new(cos_t, 0.0, -sin_t, 0.0);
        mat.cols[2] = Vec4::new(sin_t, 0.0, cos_t, 0.0);
        mat
    }

    /// OpenGL-style perspective projection: right-handed eye space looking down -z, clip-space
    /// depth in [-1, 1].
    pub fn perspective(fov_y: Angle, aspect: f32, near: f32, far: f32) -> Mat4 {
        Self::from_glam(glam::Mat4::perspective_rh_gl(
            fov_y.to_rad(),
            aspect,
            near,
            far,
        ))
    }

    /// OpenGL-style orthographic projection with clip-space depth in [-1, 1].
    pub fn orthographic(x: (f32, f32), y: (f32, f32), near: f32, far: f32) -> Mat4 {
        Self::from_glam(glam::Mat4::orthographic_rh_gl(
            x.0, x.1, y.0, y.1, near, far,
        ))
    }

    pub fn determinant(&self) -> f32 {
        self.to_glam().determinant()
    }

    /// Returns the inverse matrix, or `None` if the determinant is zero or not finite.
    pub fn try_inverse(&self) -> Option<Mat4> {
        let det = self.determinant();
        (det != 0.0 && det.is_finite()).then(|| self.inverse())
    }

    /// Returns the inverse matrix. The matrix is expected to be invertible; a singular input
    /// produces non-finite elements (and fails a debug assertion).
    pub fn inverse(&self) -> Mat4 {
        debug_assert!(
            self.determinant() != 0.0,
            "inverting a singular matrix: {:?}",
            self
        );
        Self::from_glam(self.to_glam().inverse())
    }

    pub fn frobenius_norm_squared(&self) -> f32 {
        self.cols.iter().map(|c| c.length_squared()).sum()
    }

    fn to_glam(self) -> glam::Mat4 {
        glam::Mat4::from_cols(self.cols[0], self.cols[1], self.cols[2], self.cols[3])
    }
    fn from_glam(m: glam::Mat4) -> Mat4 {
        Mat4::from_cols(m.x_axis, m.y_axis, m.z_axis, m.w_axis)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 {
        self.cols[0] * v[0] + self.cols[1] * v[1] + self.cols[2] * v[2] + self.cols[3] * v[3]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, m: Self) -> Mat4 {
        let mut mat = Mat4::ZERO;
        for c in 0..4 {
            mat.cols[c] = self * m.cols[c];
        }
        mat
    }
}

impl Sub for Mat4 {
    type Output = Mat4;
    fn sub(self, m: Self) -> Mat4 {
        let mut mat = self;
        for c in 0..4 {
            mat.cols[c] = self.cols[c] - m.cols[c];
        }
        mat
    }
}

/// Transforms a direction: the translation column is ignored.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        let v4 = self.cols[0] * v[0] + self.cols[1] * v[1] + self.cols[2] * v[2];
        Vec3::new(v4.x, v4.y, v4.z)
    }
}

/// Transforms a point, including the perspective divide by `w`.
impl Mul<Point3> for Mat4 {
    type Output = Point3;
    fn mul(self, p: Point3) -> Self::Output {
        let v4 = self * p.as_vec4();
        if v4.w == 1.0 {
            Point3::new(v4.x, v4.y, v4.z)
        } else {
            Point3::new(v4.x / v4.w, v4.y / v4.w, v4.z / v4.w)
        }
    }
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        if ($left - $right).norm_squared() > 1e-4 {
            panic!(
                "Assertion failed: Close({}, {}) values: {} vs. {}, dist = {}",
                stringify!($left),
                stringify!($right),
                $left,
                $right,
                ($left - $right).norm()
            )
        }
    };
}

#[cfg(test)]
mod test {
    use super::{point3, vec3, Mat4, Point3, Vec3, Vec4};
    use crate::assert_le;

    #[test]
    fn test_cross_is_right_handed() {
        assert_close!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_close!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert!(vec3(2.0, 0.0, 0.0).cross(vec3(-5.0, 0.0, 0.0)).is_zero());
    }

    #[test]
    fn test_inverse() {
        let m = Mat4::translater(vec3(0.3, -2.0, 7.0))
            * Mat4::rotater(vec3(0.6, 0.8, 0.0), crate::new_rad(0.3))
            * Mat4::nonuniform_scale(vec3(2.0, 0.5, 3.0));
        let expected_identity = m.inverse() * m;
        assert_le!(
            (expected_identity - Mat4::IDENTITY).frobenius_norm_squared(),
            1e-8
        );
        assert!(m.try_inverse().is_some());
        assert!(Mat4::scaler(0.0).try_inverse().is_none());
    }

    #[test]
    fn test_rotater_y_matches_axis_angle() {
        let angle = crate::new_deg(37.0);
        let diff = Mat4::rotater_y(angle) - Mat4::rotater(Vec3::Y, angle);
        assert_le!(diff.frobenius_norm_squared(), 1e-10);
        // Quarter turn about +y takes +x to -z.
        assert_close!(Mat4::rotater_y(crate::new_deg(90.0)) * Vec3::X, -Vec3::Z);
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let proj = Mat4::perspective(crate::new_deg(90.0), 1.0, 0.1, 100.0);
        let near = proj * point3(0.0, 0.0, -0.1);
        let far = proj * point3(0.0, 0.0, -100.0);
        assert_le!((near.z + 1.0).abs(), 1e-4);
        assert_le!((far.z - 1.0).abs(), 1e-4);
        // 90 degrees vertical fov: at depth 1 the top of the view is y = 1.
        let top = proj * point3(0.0, 1.0, -1.0);
        assert_le!((top.y - 1.0).abs(), 1e-5);
    }

    #[test]
    fn test_point_transform_divides_by_w() {
        let mut m = Mat4::IDENTITY;
        m.cols[3] = Vec4::new(0.0, 0.0, 0.0, 2.0);
        let p = m * point3(2.0, 4.0, 6.0);
        assert_close!(Vec3::from(p), vec3(1.0, 2.0, 3.0));
        assert_eq!(Mat4::IDENTITY * Point3::ORIGIN, Point3::ORIGIN);
    }
}
