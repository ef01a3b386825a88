//! Foundation types for Planar.
//!
//! This crate provides the value types shared by every other Planar crate.
//! It has no notion of the dependency graph or the object registry; it only
//! knows how to represent, parse, and print the things those crates store.
//!
//! # Key Types
//!
//! - [`Coord`] - A position on the drawing plane
//! - [`ObjectId`] - Short name packed into 64 bits
//! - [`Rgb`] - 24-bit display color
//! - [`ObjectKind`] - Point, Line, Ray, Segment, or Circle
//! - [`Category`] - The registry collection an [`ObjectKind`] lives in

pub mod color;
pub mod coord;
pub mod error;
pub mod id;
pub mod kind;
pub mod parse;

pub use color::Rgb;
pub use coord::Coord;
pub use error::TypeError;
pub use id::ObjectId;
pub use kind::{Category, ObjectKind};
pub use parse::{looks_numeric, parse_bool, parse_coord, parse_number};
