use planar_graph::PointId;
use planar_types::{Category, ObjectId};

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No object with this id exists in the expected collection.
    #[error("{category} not found: {id}")]
    NotFound { category: Category, id: ObjectId },

    /// No object with this id exists in any collection.
    #[error("object not found: {0}")]
    NotFoundAnywhere(ObjectId),

    /// An object references a point that is not in the point store.
    #[error("object {object} references missing point {point}")]
    DanglingPoint { object: ObjectId, point: PointId },
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
