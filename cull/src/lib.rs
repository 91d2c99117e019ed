//! View-frustum culling of object instances, built on the separating-axis test in `geometry`.

pub mod instance;
pub mod scene;

pub use instance::{CullTest, Instance};
pub use scene::{CullStats, ExecPolicy, Scene};
