use geometry::bbox::BBox;
use geometry::{separating_axis, Aabb, AffineTransform, Frustum, OrientedBox, Transform};
use math::hcm::Vec3;

/// How an instance is tested against the view volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullTest {
    /// Axis-aligned world bounds of the transformed object. Conservative: may keep objects that
    /// are just outside the view.
    Bounds,
    /// The object-space box carried through the instance transform.
    Exact,
}

/// One placed copy of an object: its object-space bounds and the transform into the world.
#[derive(Debug, Clone, Copy)]
pub struct Instance {
    pub bounds: BBox,
    pub transform: AffineTransform,
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance[world bounds = {}]", self.world_bounds())
    }
}

impl Instance {
    pub fn new(bounds: BBox) -> Self {
        Instance {
            bounds,
            transform: AffineTransform::identity(),
        }
    }
    pub fn with_transform(self, transform: AffineTransform) -> Self {
        Instance { transform, ..self }
    }
    pub fn translated(self, offset: Vec3) -> Self {
        self.with_transform(self.transform.translate(offset))
    }

    pub fn world_bounds(&self) -> BBox {
        self.transform.apply(self.bounds)
    }

    pub fn oriented(&self) -> OrientedBox {
        OrientedBox::new(self.bounds, &self.transform)
    }

    /// Returns true if the instance may be seen through `frustum`.
    pub fn is_visible(&self, frustum: &Frustum, test: CullTest) -> bool {
        let axis = match test {
            CullTest::Bounds => separating_axis(frustum, &Aabb::from(self.world_bounds())),
            CullTest::Exact => separating_axis(frustum, &self.oriented()),
        };
        match axis {
            Some(axis) => {
                log::trace!("{} culled along {}", self, axis);
                false
            }
            None => true,
        }
    }
}
