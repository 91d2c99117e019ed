use math::hcm::{self, Mat4};
use math::Angle;

use crate::frustum::Frustum;
use crate::transform::AffineTransform;

/// First-person camera that flies over the xz-plane: a position, a heading (`yaw`) and a
/// perspective lens. Right-handed; at `yaw = 0` the camera looks down -z with +y up.
///
/// Produces OpenGL-style matrices: `view()` maps world space to eye space, `projection()` maps eye
/// space to clip space with depth in [-1, 1].
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: hcm::Point3,
    pub yaw: Angle,
    fov_y: Angle,
    aspect: f32,
    near: f32,
    far: f32,
}

impl FlyCamera {
    /// A camera at the origin with the given aspect ratio (width / height) and vertical field of
    /// view; clip planes default to `near = 0.1`, `far = 100`.
    pub fn new(aspect: f32, fov_y: Angle) -> FlyCamera {
        FlyCamera {
            position: hcm::Point3::ORIGIN,
            yaw: Angle::ZERO,
            fov_y,
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn with_clip_planes(self, near: f32, far: f32) -> Self {
        math::assert_lt!(0.0, near);
        math::assert_lt!(near, far);
        Self { near, far, ..self }
    }

    pub fn at(self, position: hcm::Point3) -> Self {
        Self { position, ..self }
    }

    /// Turns the camera so that `target` is straight ahead in the xz-plane. The camera has no
    /// pitch, so the height of `target` is ignored.
    pub fn looking_at(self, target: hcm::Point3) -> Self {
        let d = target - self.position;
        Self {
            yaw: math::new_rad(d.x.atan2(-d.z)),
            ..self
        }
    }

    /// Unit heading in the xz-plane: `(sin yaw, 0, -cos yaw)`.
    pub fn forward(&self) -> hcm::Vec3 {
        let (sin_t, cos_t) = self.yaw.sin_cos();
        hcm::Vec3::new(sin_t, 0.0, -cos_t)
    }

    /// Unit rightward direction: `(cos yaw, 0, sin yaw)`.
    pub fn right(&self) -> hcm::Vec3 {
        let (sin_t, cos_t) = self.yaw.sin_cos();
        hcm::Vec3::new(cos_t, 0.0, sin_t)
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.forward() * distance;
    }
    pub fn strafe(&mut self, distance: f32) {
        self.position = self.position + self.right() * distance;
    }
    pub fn rise(&mut self, distance: f32) {
        self.position = self.position + hcm::Vec3::Y * distance;
    }
    /// Positive angles turn right (clockwise seen from above).
    pub fn turn(&mut self, angle: Angle) {
        self.yaw = self.yaw + angle;
    }

    /// World-to-eye transform: `rotate_y(yaw) * translate(-position)`.
    pub fn view(&self) -> AffineTransform {
        AffineTransform::translater(-hcm::Vec3::from(self.position)).rotate_y(self.yaw)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view().matrix()
    }

    /// The world-space view volume, rebuilt from the current matrices.
    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.view_projection())
    }

    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }
}
