pub mod error;
pub mod math;
pub mod model;
pub mod modeler;
pub mod operations;
pub mod selection;
pub mod settings;

pub use error::{ModelerError, Result};
pub use modeler::{Action, Modeler, Outcome, SceneClick};
pub use settings::{AngleVertex, ModelerSettings};
