//! The three object collections.

use planar_graph::PointStore;
use planar_types::{Category, ObjectId};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::object::GeomObject;
use crate::resolve::ResolvedObject;
use crate::traits::ObjectLookup;

/// Append-only registry of geometric objects, one collection per category.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    points: Vec<GeomObject>,
    lines: Vec<GeomObject>,
    circles: Vec<GeomObject>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of registered objects.
    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len() + self.circles.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of objects in one collection.
    pub fn count(&self, category: Category) -> usize {
        self.collection(category).len()
    }

    /// Register an object. An existing object with the same id in the same
    /// collection is shadowed, not replaced.
    pub fn register(&mut self, object: GeomObject) -> ObjectId {
        let id = object.id;
        debug!(%id, kind = %object.kind, visible = object.visible, color = %object.color, "registered object");
        self.collection_mut(object.category()).push(object);
        id
    }

    /// Set the display flag of the newest object with `id` in any
    /// collection.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> RegistryResult<&GeomObject> {
        let category = self
            .find_any(id)
            .map(GeomObject::category)
            .ok_or(RegistryError::NotFoundAnywhere(id))?;
        let object = self
            .collection_mut(category)
            .iter_mut()
            .rev()
            .find(|obj| obj.id == id)
            .ok_or(RegistryError::NotFoundAnywhere(id))?;
        object.visible = visible;
        Ok(&*object)
    }

    /// Iterate over all objects: points, then line-likes, then circles, each
    /// in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GeomObject> {
        self.points.iter().chain(&self.lines).chain(&self.circles)
    }

    /// Resolve the object `id` in `category` against the current point
    /// coordinates.
    pub fn resolve(
        &self,
        store: &PointStore,
        category: Category,
        id: ObjectId,
    ) -> RegistryResult<ResolvedObject> {
        ResolvedObject::from_object(self.require(category, id)?, store)
    }

    fn collection(&self, category: Category) -> &Vec<GeomObject> {
        match category {
            Category::Point => &self.points,
            Category::Line => &self.lines,
            Category::Circle => &self.circles,
        }
    }

    fn collection_mut(&mut self, category: Category) -> &mut Vec<GeomObject> {
        match category {
            Category::Point => &mut self.points,
            Category::Line => &mut self.lines,
            Category::Circle => &mut self.circles,
        }
    }
}

impl ObjectLookup for ObjectRegistry {
    fn find(&self, category: Category, id: ObjectId) -> Option<&GeomObject> {
        self.collection(category).iter().rev().find(|obj| obj.id == id)
    }
}
