use std::fmt::{Display, Formatter, Result};
use std::ops::AddAssign;

use geometry::bbox::{self, BBox};
use geometry::Frustum;
use math::hcm::Vec3;
use rayon::prelude::*;

use crate::instance::{CullTest, Instance};

/// Whether the culling pass runs on the calling thread or on the rayon pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecPolicy {
    Serial,
    Parallel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    pub total: usize,
    pub visible: usize,
}

impl CullStats {
    pub fn culled(&self) -> usize {
        self.total - self.visible
    }
}

impl AddAssign for CullStats {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.visible += rhs.visible;
    }
}

impl Display for CullStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} of {} visible ({} culled)",
            self.visible,
            self.total,
            self.culled()
        )
    }
}

/// A flat collection of instances.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    instances: Vec<Instance>,
}

impl Scene {
    pub fn new(instances: Vec<Instance>) -> Self {
        Scene { instances }
    }

    /// Lays out `count` x `count` copies of an object with the given bounds on the xz-plane,
    /// `spacing` apart and centered on the origin.
    pub fn grid(bounds: BBox, count: usize, spacing: f32) -> Self {
        let half = (count as f32 - 1.0) * 0.5;
        let mut instances = Vec::with_capacity(count * count);
        for i in 0..count {
            for j in 0..count {
                let offset = Vec3::new(
                    (i as f32 - half) * spacing,
                    0.0,
                    (j as f32 - half) * spacing,
                );
                instances.push(Instance::new(bounds).translated(offset));
            }
        }
        Scene { instances }
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
    pub fn len(&self) -> usize {
        self.instances.len()
    }
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// World-space bounds of all instances.
    pub fn bbox(&self) -> BBox {
        self.instances
            .iter()
            .fold(BBox::empty(), |b, inst| bbox::union(b, inst.world_bounds()))
    }

    /// Returns the indices of the instances that survive culling against `frustum`, in ascending
    /// order regardless of `policy`.
    pub fn visible(&self, frustum: &Frustum, test: CullTest, policy: ExecPolicy) -> Vec<usize> {
        match policy {
            ExecPolicy::Serial => (0..self.instances.len())
                .filter(|&i| self.instances[i].is_visible(frustum, test))
                .collect(),
            ExecPolicy::Parallel => (0..self.instances.len())
                .into_par_iter()
                .filter(|&i| self.instances[i].is_visible(frustum, test))
                .collect(),
        }
    }

    pub fn cull(&self, frustum: &Frustum, test: CullTest, policy: ExecPolicy) -> CullStats {
        let visible = self.visible(frustum, test, policy).len();
        log::trace!("{}/{} instances visible", visible, self.len());
        CullStats {
            total: self.len(),
            visible,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::point3;

    #[test]
    fn test_grid_layout() {
        let unit = BBox::new(point3(-0.5, 0.0, -0.5), point3(0.5, 1.0, 0.5));
        let scene = Scene::grid(unit, 3, 2.0);
        assert_eq!(scene.len(), 9);
        let b = scene.bbox();
        assert_eq!(b.min(), point3(-2.5, 0.0, -2.5));
        assert_eq!(b.max(), point3(2.5, 1.0, 2.5));
        // The middle instance sits at the origin.
        assert_eq!(scene.instances()[4].world_bounds(), unit);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        let f = Frustum::new(math::hcm::Mat4::IDENTITY);
        let stats = scene.cull(&f, CullTest::Bounds, ExecPolicy::Parallel);
        assert_eq!(stats, CullStats { total: 0, visible: 0 });
    }

    #[test]
    fn test_stats_display() {
        let stats = CullStats {
            total: 10,
            visible: 4,
        };
        assert_eq!(stats.culled(), 6);
        assert_eq!(format!("{}", stats), "4 of 10 visible (6 culled)");

        let mut sum = CullStats::default();
        sum += stats;
        sum += stats;
        assert_eq!(sum, CullStats { total: 20, visible: 8 });
    }
}
