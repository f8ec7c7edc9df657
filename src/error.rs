use thiserror::Error;

/// Top-level error type for the point modeler.
#[derive(Debug, Error, PartialEq)]
pub enum ModelerError {
    #[error("point not found")]
    PointNotFound,

    #[error("triangle not found")]
    TriangleNotFound,

    /// A triangle's three members must be distinct points.
    #[error("triangle lists the same point more than once")]
    DuplicateMember,

    /// A triangle needs exactly three selected points.
    #[error("triangle creation needs 3 selected points, found {len}")]
    IncompleteSelection { len: usize },

    #[error("invalid settings: {0}")]
    Settings(String),
}

/// Convenience type alias for results using [`ModelerError`].
pub type Result<T> = std::result::Result<T, ModelerError>;
