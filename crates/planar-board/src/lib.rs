//! Object factory and command layer for Planar.
//!
//! A [`Board`] owns a point store and an object registry and is the only way
//! to build on them: each factory call turns one construction request into
//! graph points with the right derive rules and registers the resulting
//! object. [`Command`] parses the textual command language and
//! [`Board::execute`] runs it.
//!
//! Every request is validated in full before the board is touched, so a
//! failing request leaves the graph and the registry unchanged.

pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod execute;
pub mod script;

pub use board::{Board, Destination, ObjectOptions, RadiusArg};
pub use command::{Command, CreateArgs, USAGE};
pub use config::BoardConfig;
pub use error::{CommandError, CommandResult};
pub use execute::Outcome;

// Re-export key types
pub use planar_graph::{PointId, PropagationReport};
pub use planar_registry::{ResolvedGeometry, ResolvedObject};
pub use planar_types::{Category, Coord, ObjectId, ObjectKind, Rgb};
