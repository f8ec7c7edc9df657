pub mod angle;
pub mod distance;

pub use angle::{angle_at_vertex, angle_at_vertex_radians};
pub use distance::{distance, distance_components, length};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
