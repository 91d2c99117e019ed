use thiserror::Error;

/// Errors reported by the fallible shape constructors. The infallible constructors (`Aabb::new`,
/// `Frustum::new`, ...) treat the same conditions as caller bugs and only check them with debug
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("matrix is not invertible (determinant = {determinant})")]
    SingularMatrix { determinant: f32 },
    #[error("clip-space corner {corner} maps to a point at infinity (w = 0)")]
    PointAtInfinity { corner: usize },
    #[error("a convex shape needs at least one vertex")]
    EmptyVertices,
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexIndexOutOfRange { index: usize, len: usize },
}
