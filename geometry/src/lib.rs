//! Convex shapes and the separating-axis intersection test used for view-frustum culling.
//!
//! - [`convex`]: the `ConvexShape` trait, `project()` and `intersects()`.
//! - Shapes: [`Aabb`], [`Frustum`], [`OrientedBox`] and [`ConvexPolytope`].
//! - Support types: the [`BBox`] bounds type, [`AffineTransform`] and the [`FlyCamera`] that
//!   produces view-projection matrices.

pub mod aabb;
pub mod bbox;
pub mod camera;
pub mod convex;
pub mod error;
pub mod frustum;
pub mod oriented;
pub mod polytope;
pub mod transform;

pub use aabb::Aabb;
pub use bbox::BBox;
pub use camera::FlyCamera;
pub use convex::{intersects, project, separating_axis, ConvexShape};
pub use error::GeometryError;
pub use frustum::Frustum;
pub use oriented::OrientedBox;
pub use polytope::ConvexPolytope;
pub use transform::{AffineTransform, Transform};
