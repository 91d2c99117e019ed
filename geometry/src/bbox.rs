use std::fmt::{Display, Formatter, Result};

use math::{
    float::min_max,
    hcm::{Point3, Vec3},
};

/// 3D bounding-box type. Boundary check is closed (`[min, max]`) on all axes.
/// - Build one from 2 `Point3`s, or from a point cloud with `from_points()`;
/// - Expand it by `b.union()` or `union(b1, b2)`;
/// - Check if it `contains()` a point, `encloses()` another box, or `overlaps()` another box.
///
/// `BBox` is the bounds-arithmetic type. Convert it into an [`Aabb`](crate::Aabb) to use it in a
/// separating-axis query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    min: Point3,
    max: Point3,
}

impl BBox {
    /// The empty box: a union identity, contains nothing.
    pub fn empty() -> BBox {
        BBox {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(-f32::INFINITY, -f32::INFINITY, -f32::INFINITY),
        }
    }
    /// Builds the box spanned by two opposite corners, in any order.
    pub fn new(p0: Point3, p1: Point3) -> BBox {
        let (xmin, xmax) = min_max(p0.x, p1.x);
        let (ymin, ymax) = min_max(p0.y, p1.y);
        let (zmin, zmax) = min_max(p0.z, p1.z);
        BBox {
            min: Point3::new(xmin, ymin, zmin),
            max: Point3::new(xmax, ymax, zmax),
        }
    }

    /// Computes the tightest box around `points`, e.g. the vertex positions of a mesh.
    /// Returns `BBox::empty()` for an empty slice.
    /// ```
    /// use geometry::BBox;
    /// use math::hcm::point3;
    /// let b = BBox::from_points(&[point3(1.0, 0.0, 2.0), point3(-1.0, 3.0, 0.5)]);
    /// assert_eq!(b.min(), point3(-1.0, 0.0, 0.5));
    /// assert_eq!(b.max(), point3(1.0, 3.0, 2.0));
    /// ```
    pub fn from_points(points: &[Point3]) -> BBox {
        points.iter().fold(BBox::empty(), |b, p| b.union(*p))
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    pub fn union(self, p: Point3) -> BBox {
        let mut result = self;
        for i in 0..3 {
            result.min[i] = self.min[i].min(p[i]);
            result.max[i] = self.max[i].max(p[i]);
        }
        result
    }

    pub fn translated(self, offset: Vec3) -> BBox {
        BBox {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    pub fn midpoint(self) -> Point3 {
        (self.max - self.min) * 0.5 + self.min
    }

    /// Lists the 8 corners; corner `i` takes `max` on axis `k` when bit `k` of `i` is set.
    pub fn all_corners(&self) -> [Point3; 8] {
        let mut res = [self.min; 8];

        for (i, corner) in res.iter_mut().enumerate() {
            for axis in 0..3 {
                if i & (1 << axis) != 0 {
                    corner[axis] = self.max[axis];
                }
            }
        }

        res
    }
    pub fn min(&self) -> Point3 {
        self.min
    }
    pub fn max(&self) -> Point3 {
        self.max
    }

    /// Returns true if the two boxes share at least one point. This is the separating-axis test
    /// specialised to two axis-aligned boxes, where the 3 world axes are the only candidates.
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && other.min[axis] <= self.max[axis])
    }

    pub fn encloses(&self, other: Self) -> bool {
        for axis in 0..3 {
            if self.min[axis] > other.min[axis] {
                return false;
            }
            if self.max[axis] < other.max[axis] {
                return false;
            }
        }
        true
    }
    pub fn contains(&self, p: Point3) -> bool {
        for axis in 0..3 {
            if self.min[axis] > p[axis] {
                return false;
            }
            if self.max[axis] < p[axis] {
                return false;
            }
        }
        true
    }
}

impl Display for BBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "box[{} -> {}]", self.min, self.max)
    }
}

pub fn union(b0: BBox, b1: BBox) -> BBox {
    b0.union(b1.min).union(b1.max)
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::{point3, vec3};

    #[test]
    fn test_union_and_empty() {
        let empty = BBox::empty();
        assert!(empty.is_empty());
        assert!(!empty.contains(Point3::ORIGIN));
        assert!(BBox::from_points(&[]).is_empty());

        let b = union(
            BBox::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0)),
            BBox::new(point3(2.0, -1.0, 0.5), point3(3.0, 0.0, 0.75)),
        );
        assert_eq!(b.min(), point3(0.0, -1.0, 0.0));
        assert_eq!(b.max(), point3(3.0, 1.0, 1.0));
        assert_eq!(union(empty, b), b);
    }

    #[test]
    fn test_overlaps_is_closed() {
        let a = BBox::new(point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0));
        assert!(a.overlaps(&a.translated(vec3(1.0, 0.0, 0.0))));
        assert!(!a.overlaps(&a.translated(vec3(1.01, 0.0, 0.0))));
        assert!(a.overlaps(&BBox::new(point3(0.2, 0.2, 0.2), point3(0.3, 0.3, 0.3))));
    }

    #[test]
    fn test_corners_are_contained() {
        let b = BBox::new(point3(-0.3, 0.4, 0.8), point3(3.4, 2.3, 4.4));
        for corner in b.all_corners().iter() {
            assert!(b.contains(*corner));
        }
        assert_eq!(b.all_corners()[0], b.min());
        assert_eq!(b.all_corners()[7], b.max());
        assert!(b.contains(b.midpoint()));
        assert!(b.encloses(b));
    }
}
