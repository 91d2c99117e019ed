/// Defines useful functions for common math operations, tools and constants:
/// - 1D closed interval (`Interval`), the result type of projecting a shape onto an axis,
/// - `Angle` to represent angles unambiguously,
/// - Macros to check if two math quantities are less than (or equal to) each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 4D vector, 4x4 matrices.
/// - 4x4 matrix inversion, perspective / orthographic projections and rigid motions.
pub mod hcm;

pub use float::Angle;
pub fn new_rad(rad: f32) -> float::Angle {
    float::Angle::new_rad(rad)
}
pub fn new_deg(deg: f32) -> float::Angle {
    float::Angle::new_deg(deg)
}
