//! Registry of named geometric objects for Planar.
//!
//! Every user-visible object (point, line, ray, segment, circle) is a
//! [`GeomObject`]: an identifier, display attributes, and a [`Shape`] that
//! references points in a [`PointStore`](planar_graph::PointStore). The
//! registry never owns points; it only holds their ids.
//!
//! # Collections
//!
//! Objects are kept in three append-only collections, one per
//! [`Category`](planar_types::Category):
//!
//! - points
//! - line-likes (lines, rays, segments)
//! - circles
//!
//! Lookups scan newest first, so an object registered under an id that is
//! already taken shadows the older one.
//!
//! # Resolution
//!
//! [`ObjectRegistry::resolve`] turns an object into a [`ResolvedObject`]
//! carrying the current coordinates needed to draw it.

pub mod error;
pub mod ids;
pub mod object;
pub mod registry;
pub mod resolve;
pub mod traits;

pub use error::{RegistryError, RegistryResult};
pub use ids::IdAllocator;
pub use object::{CircleShape, GeomObject, LineShape, Radius, Shape};
pub use registry::ObjectRegistry;
pub use resolve::{ResolvedGeometry, ResolvedObject};
pub use traits::ObjectLookup;
