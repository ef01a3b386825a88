//! Running parsed commands against a board.

use std::fmt;
use std::path::PathBuf;

use planar_registry::ResolvedObject;
use planar_types::{Category, ObjectId, ObjectKind};
use serde::Serialize;

use crate::board::Board;
use crate::command::{Command, CreateArgs};
use crate::error::{CommandError, CommandResult};

/// Result of a successful command.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Created {
        object: ResolvedObject,
    },
    Moved {
        /// The moved point objects at their new positions.
        points: Vec<ResolvedObject>,
        /// Number of derived points that were recomputed.
        recomputed: usize,
    },
    VisibilityChanged {
        names: Vec<String>,
        visible: bool,
    },
    Loaded {
        path: PathBuf,
        commands: usize,
    },
    Listed {
        objects: Vec<ResolvedObject>,
    },
    Info {
        object: ResolvedObject,
    },
}

impl Board {
    /// Run one command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Outcome> {
        match command {
            Command::Create { args, options } => {
                let id = match args {
                    CreateArgs::Point(at) => self.create_point(at, options),
                    CreateArgs::LineLike { kind, a, b } => match kind {
                        ObjectKind::Segment => self.create_segment(a, b, options)?,
                        ObjectKind::Ray => self.create_ray(a, b, options)?,
                        ObjectKind::Line => self.create_line(a, b, options)?,
                        ObjectKind::Point | ObjectKind::Circle => {
                            return Err(CommandError::invalid(
                                "object type",
                                format!("{kind} is not a line kind"),
                            ));
                        }
                    },
                    CreateArgs::Circle { center, radius } => {
                        self.create_circle(center, radius, options)?
                    }
                };
                let object = self.lookup(args.kind().category(), id)?;
                Ok(Outcome::Created { object })
            }
            Command::Midpoint { a, b, options } => {
                let id = self.midpoint(a, b, options)?;
                let object = self.lookup(Category::Point, id)?;
                Ok(Outcome::Created { object })
            }
            Command::MovePoints {
                points,
                destinations,
            } => {
                let report = self.move_points(&points, &destinations)?;
                let points = points
                    .iter()
                    .map(|id| self.lookup(Category::Point, *id))
                    .collect::<CommandResult<Vec<_>>>()?;
                Ok(Outcome::Moved {
                    points,
                    recomputed: report.recomputed.len(),
                })
            }
            Command::Show(names) => self.change_visibility(names, true),
            Command::Hide(names) => self.change_visibility(names, false),
            Command::LoadSource(path) => {
                let commands = self.load_source(&path)?;
                Ok(Outcome::Loaded { path, commands })
            }
            Command::List => Ok(Outcome::Listed {
                objects: self.list()?,
            }),
            Command::Info(id) => Ok(Outcome::Info {
                object: self.lookup_any(id)?,
            }),
        }
    }

    /// Parse and run one line. Blank lines and comments yield `Ok(None)`.
    pub fn execute_line(&mut self, line: &str) -> CommandResult<Option<Outcome>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    fn change_visibility(&mut self, names: Vec<ObjectId>, visible: bool) -> CommandResult<Outcome> {
        self.set_visible(&names, visible)?;
        Ok(Outcome::VisibilityChanged {
            names: names.iter().map(ObjectId::name).collect(),
            visible,
        })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { object } => write!(f, "created {object}"),
            Self::Moved { points, recomputed } => {
                for point in points {
                    writeln!(f, "moved {point}")?;
                }
                write!(f, "{recomputed} derived point(s) recomputed")
            }
            Self::VisibilityChanged { names, visible } => {
                let verb = if *visible { "shown" } else { "hidden" };
                write!(f, "{verb}: {}", names.join(" "))
            }
            Self::Loaded { path, commands } => {
                write!(f, "loaded {} ({commands} command(s))", path.display())
            }
            Self::Listed { objects } => {
                if objects.is_empty() {
                    return write!(f, "no objects");
                }
                let lines: Vec<String> = objects.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Self::Info { object } => write!(f, "{object}"),
        }
    }
}
