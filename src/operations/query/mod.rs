mod angle;
mod distance;
mod triangle_geometry;

pub use angle::Angle;
pub use distance::Distance;
pub use triangle_geometry::{TriangleGeometry, TriangleMeasurements};
