use planar_types::{Category, ObjectId, ObjectKind};

use crate::error::{RegistryError, RegistryResult};
use crate::object::GeomObject;

/// Read access to registered objects by id.
///
/// Implementations must return the most recently registered object when
/// several share an id.
pub trait ObjectLookup {
    /// Find an object in one collection.
    fn find(&self, category: Category, id: ObjectId) -> Option<&GeomObject>;

    /// Find an object of an exact kind.
    ///
    /// Line-likes share a collection, so the newest line-like with this id
    /// must also match `kind`; an older object of the right kind hidden
    /// behind it is not returned.
    fn find_kind(&self, kind: ObjectKind, id: ObjectId) -> Option<&GeomObject> {
        self.find(kind.category(), id).filter(|obj| obj.kind == kind)
    }

    /// Find an object in any collection: points, then line-likes, then
    /// circles.
    fn find_any(&self, id: ObjectId) -> Option<&GeomObject> {
        [Category::Point, Category::Line, Category::Circle]
            .into_iter()
            .find_map(|category| self.find(category, id))
    }

    /// Like [`find`](Self::find) but reports a missing object as an error.
    fn require(&self, category: Category, id: ObjectId) -> RegistryResult<&GeomObject> {
        self.find(category, id)
            .ok_or(RegistryError::NotFound { category, id })
    }
}
